use std::{
    io,
    path::{Path, PathBuf},
};

use fitcoach_domain::{DEFAULT_BODY_WEIGHT_KG, StreakWindow, TimeFrame};
use log::debug;
use serde::{Deserialize, Serialize};

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, SettingsError>;
    async fn write_settings(&self, settings: Settings) -> Result<(), SettingsError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_body_weight_kg: f64,
    pub streak_window: StreakWindow,
    pub analytics_time_frame: TimeFrame,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str::<Settings>(json)?.validated()
    }

    /// Read settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        Settings::from_file_contents(std::fs::read_to_string(path), path)
    }

    fn from_file_contents(
        contents: io::Result<String>,
        path: &Path,
    ) -> Result<Self, SettingsError> {
        match contents {
            Ok(json) => Settings::from_json(&json),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                Ok(Settings::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn validated(self) -> Result<Self, SettingsError> {
        if !self.default_body_weight_kg.is_finite() || self.default_body_weight_kg <= 0.0 {
            return Err(SettingsError::InvalidBodyWeight(self.default_body_weight_kg));
        }

        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
            streak_window: StreakWindow::default(),
            analytics_time_frame: TimeFrame::default(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to access settings: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("default body weight must be a positive number of kilograms ({0})")]
    InvalidBodyWeight(f64),
}

/// Settings stored as a JSON file, accessed through `tokio::fs`.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for FileSettingsRepository {
    async fn read_settings(&self) -> Result<Settings, SettingsError> {
        Settings::from_file_contents(tokio::fs::read_to_string(&self.path).await, &self.path)
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(&settings.validated()?)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
