use chrono::{DateTime, Utc};
use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ExerciseSpec, ExperienceLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: WorkoutID,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseSpec>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// The completion time, or the creation time for records completed without one.
    #[must_use]
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.completed_at.unwrap_or(self.created_at)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const VERY_EASY: Difficulty = Difficulty(1);
    pub const EASY: Difficulty = Difficulty(2);
    pub const MODERATE: Difficulty = Difficulty(3);
    pub const HARD: Difficulty = Difficulty(4);
    pub const VERY_HARD: Difficulty = Difficulty(5);

    pub fn new(value: u8) -> Result<Self, DifficultyError> {
        if !(1..=5).contains(&value) {
            return Err(DifficultyError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Difficulty of a goal-based workout for the given experience level.
    #[must_use]
    pub fn for_level(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Difficulty::VERY_EASY,
            ExperienceLevel::Intermediate => Difficulty::MODERATE,
            ExperienceLevel::Advanced => Difficulty::VERY_HARD,
        }
    }

    /// Difficulty of a specialized routine rated at the given level.
    #[must_use]
    pub fn for_routine(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Difficulty::EASY,
            ExperienceLevel::Intermediate => Difficulty::MODERATE,
            ExperienceLevel::Advanced => Difficulty::HARD,
        }
    }

    /// Map a free-text rating like "hard" to a difficulty; unknown labels are moderate.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Difficulty::VERY_EASY,
            "easy" => Difficulty::EASY,
            "hard" => Difficulty::HARD,
            "advanced" => Difficulty::VERY_HARD,
            _ => Difficulty::MODERATE,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::MODERATE
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Difficulty must be in the range 1 to 5 ({0})")]
    OutOfRange(u8),
}

/// A workout plan as produced by a generator, before it is stored as a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub title: String,
    pub description: String,
    pub exercises: Vec<ExerciseSpec>,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

impl GeneratedWorkout {
    /// A workout without a title or without exercises cannot be presented.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.title.trim().is_empty() && !self.exercises.is_empty()
    }
}
