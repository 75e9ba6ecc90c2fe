use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::Named;

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
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Triceps,
    Back,
    Biceps,
    Core,
    Legs,
    Glutes,
    Calves,
}

/// Keyword table mapping name fragments to the muscle groups they train.
///
/// Unlike [`crate::MetTable`], every matching keyword contributes.
pub struct MuscleGroupTable {
    entries: &'static [(&'static str, &'static [MuscleGroup])],
}

impl MuscleGroupTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static [MuscleGroup])]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn builtin() -> &'static MuscleGroupTable {
        static TABLE: MuscleGroupTable = MuscleGroupTable::new(&MUSCLE_GROUPS);
        &TABLE
    }

    #[must_use]
    pub fn muscle_groups(&self, name: &str) -> BTreeSet<MuscleGroup> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .filter(|(keyword, _)| name.contains(keyword))
            .flat_map(|(_, groups)| groups.iter().copied())
            .collect()
    }

    #[must_use]
    pub fn targeted_groups<T: Named>(&self, exercises: &[T]) -> BTreeSet<MuscleGroup> {
        exercises
            .iter()
            .flat_map(|e| self.muscle_groups(e.name()))
            .collect()
    }
}

use MuscleGroup::{Back, Biceps, Calves, Chest, Core, Glutes, Legs, Shoulders, Triceps};

static MUSCLE_GROUPS: [(&str, &[MuscleGroup]); 22] = [
    ("push", &[Chest, Shoulders, Triceps]),
    ("press", &[Shoulders, Triceps]),
    ("bench", &[Chest, Shoulders, Triceps]),
    ("squat", &[Legs, Glutes, Core]),
    ("deadlift", &[Back, Legs, Glutes]),
    ("pull", &[Back, Biceps]),
    ("row", &[Back, Biceps]),
    ("curl", &[Biceps]),
    ("plank", &[Core, Shoulders]),
    ("crunch", &[Core]),
    ("lunge", &[Legs, Glutes]),
    ("calf", &[Calves]),
    ("lat", &[Back]),
    ("chest", &[Chest]),
    ("shoulder", &[Shoulders]),
    ("tricep", &[Triceps]),
    ("bicep", &[Biceps]),
    ("leg", &[Legs]),
    ("glute", &[Glutes]),
    ("core", &[Core]),
    ("ab", &[Core]),
    ("back", &[Back]),
];
