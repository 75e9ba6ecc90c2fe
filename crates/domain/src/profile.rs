use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub fitness_goal: FitnessGoal,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub available_equipment: BTreeSet<Equipment>,
    pub workout_duration_minutes: u32,
}

impl UserProfile {
    #[must_use]
    pub fn has_equipment(&self, equipment: Equipment) -> bool {
        self.available_equipment.contains(&equipment)
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FitnessGoal {
    Strength,
    Endurance,
    WeightLoss,
    Flexibility,
    MuscleGain,
    #[default]
    GeneralFitness,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Dumbbells,
    Barbell,
    ResistanceBands,
    Kettlebells,
    PullUpBar,
    Bench,
    Treadmill,
    StationaryBike,
    YogaMat,
    FoamRoller,
    None,
}

/// Parse a snake_case identifier, falling back to the default variant for anything unknown.
#[must_use]
pub fn parse_or_default<T: FromStr + Default>(value: &str) -> T {
    T::from_str(value.trim()).unwrap_or_else(|_| {
        log::debug!("unknown value {value:?}, using default");
        T::default()
    })
}
