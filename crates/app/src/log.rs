use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept by [`MemoryRepository`].
pub const MAX_ENTRIES: usize = 100;

static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("log repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub time: DateTime<Utc>,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub target: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level", rename_all = "lowercase")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the newest entries in memory, most recent first.
pub struct MemoryRepository {
    entries: Mutex<VecDeque<Entry>>,
    capacity: usize,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENTRIES)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MemoryRepository {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| Error::Unavailable(err.to_string()))
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| Error::Unavailable(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// Install the logger, writing to stderr and to `repository`.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(repository: Arc<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };

        eprintln!(
            "{} {:<5} {}: {}",
            entry.time.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            entry.level,
            entry.target,
            entry.message
        );

        let repository = LOG.lock().ok().and_then(|log| log.clone());
        if let Some(Err(err)) = repository.map(|repository| repository.write_entry(entry)) {
            eprintln!("failed to store log entry: {err}");
        }
    }

    fn flush(&self) {}
}
