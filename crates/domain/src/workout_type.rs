use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Equipment, ExperienceLevel};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct WorkoutType {
    pub id: &'static str,
    pub name: &'static str,
    pub category: WorkoutCategory,
    pub duration_minutes: u32,
    pub difficulty: ExperienceLevel,
    pub equipment: &'static [Equipment],
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

impl WorkoutType {
    pub fn by_category(category: WorkoutCategory) -> impl Iterator<Item = &'static WorkoutType> {
        WORKOUT_TYPES.iter().filter(move |t| t.category == category)
    }
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
pub enum WorkoutCategory {
    Yoga,
    Outdoor,
    Sport,
    Rehabilitation,
    Quick,
}

#[must_use]
pub fn workout_types() -> &'static [WorkoutType] {
    &WORKOUT_TYPES
}

#[must_use]
pub fn workout_type(id: &str) -> Option<&'static WorkoutType> {
    let id = id.trim();
    WORKOUT_TYPES.iter().find(|t| t.id == id)
}

static WORKOUT_TYPES: [WorkoutType; 12] = [
    WorkoutType {
        id: "morning-yoga",
        name: "Morning Flow Yoga",
        category: WorkoutCategory::Yoga,
        duration_minutes: 30,
        difficulty: ExperienceLevel::Beginner,
        equipment: &[Equipment::YogaMat],
        description: "Gentle morning yoga sequence to energize your day",
        benefits: &["Flexibility", "Mental clarity", "Stress relief"],
    },
    WorkoutType {
        id: "meditation-breathwork",
        name: "Meditation & Breathwork",
        category: WorkoutCategory::Yoga,
        duration_minutes: 15,
        difficulty: ExperienceLevel::Beginner,
        equipment: &[],
        description: "Guided meditation with breathing exercises",
        benefits: &["Stress relief", "Focus", "Mindfulness"],
    },
    WorkoutType {
        id: "trail-running",
        name: "Trail Running Adventure",
        category: WorkoutCategory::Outdoor,
        duration_minutes: 45,
        difficulty: ExperienceLevel::Intermediate,
        equipment: &[],
        description: "Explore nature while building endurance",
        benefits: &["Cardio", "Mental health", "Adventure"],
    },
    WorkoutType {
        id: "cycling-tour",
        name: "Scenic Cycling Route",
        category: WorkoutCategory::Outdoor,
        duration_minutes: 60,
        difficulty: ExperienceLevel::Intermediate,
        equipment: &[Equipment::StationaryBike],
        description: "Virtual cycling through beautiful landscapes",
        benefits: &["Endurance", "Low impact", "Exploration"],
    },
    WorkoutType {
        id: "hiking-workout",
        name: "Power Hiking Session",
        category: WorkoutCategory::Outdoor,
        duration_minutes: 50,
        difficulty: ExperienceLevel::Intermediate,
        equipment: &[],
        description: "Intensive hiking-style workout for full body conditioning",
        benefits: &["Full body", "Endurance", "Nature connection"],
    },
    WorkoutType {
        id: "basketball-drills",
        name: "Basketball Skills Training",
        category: WorkoutCategory::Sport,
        duration_minutes: 40,
        difficulty: ExperienceLevel::Intermediate,
        equipment: &[],
        description: "Agility, shooting, and conditioning drills",
        benefits: &["Agility", "Coordination", "Sport-specific"],
    },
    WorkoutType {
        id: "tennis-conditioning",
        name: "Tennis Conditioning",
        category: WorkoutCategory::Sport,
        duration_minutes: 35,
        difficulty: ExperienceLevel::Intermediate,
        equipment: &[],
        description: "Court movement and racket sport conditioning",
        benefits: &["Agility", "Reaction time", "Power"],
    },
    WorkoutType {
        id: "lower-back-rehab",
        name: "Lower Back Rehabilitation",
        category: WorkoutCategory::Rehabilitation,
        duration_minutes: 25,
        difficulty: ExperienceLevel::Beginner,
        equipment: &[Equipment::YogaMat],
        description: "Gentle exercises for lower back pain relief",
        benefits: &["Pain relief", "Mobility", "Strength"],
    },
    WorkoutType {
        id: "knee-recovery",
        name: "Knee Recovery Protocol",
        category: WorkoutCategory::Rehabilitation,
        duration_minutes: 30,
        difficulty: ExperienceLevel::Beginner,
        equipment: &[Equipment::ResistanceBands],
        description: "Exercises to strengthen and mobilize knee joint",
        benefits: &["Joint health", "Stability", "Recovery"],
    },
    WorkoutType {
        id: "hiit-blast",
        name: "7-Minute HIIT Blast",
        category: WorkoutCategory::Quick,
        duration_minutes: 7,
        difficulty: ExperienceLevel::Intermediate,
        equipment: &[],
        description: "High-intensity workout for busy schedules",
        benefits: &["Time efficient", "Fat burn", "Energy boost"],
    },
    WorkoutType {
        id: "desk-break",
        name: "Desk Break Energizer",
        category: WorkoutCategory::Quick,
        duration_minutes: 5,
        difficulty: ExperienceLevel::Beginner,
        equipment: &[],
        description: "Quick stretches and movements for office workers",
        benefits: &["Posture", "Energy", "Focus"],
    },
    WorkoutType {
        id: "morning-boost",
        name: "10-Minute Morning Boost",
        category: WorkoutCategory::Quick,
        duration_minutes: 10,
        difficulty: ExperienceLevel::Beginner,
        equipment: &[],
        description: "Quick energizing routine to start your day",
        benefits: &["Energy", "Mood", "Activation"],
    },
];
