use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::FitnessGoal;

pub const DEFAULT_AGE_YEARS: u32 = 25;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WORKOUTS_PER_WEEK: u32 = 3;

const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
const CARBS_KCAL_PER_GRAM: f64 = 4.0;
const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Body measurements used for the energy requirement. Missing values use the defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyMetrics {
    pub age_years: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub sex: Option<Sex>,
    pub workouts_per_week: Option<u32>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
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
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    fn extra_calories(self) -> i64 {
        match self {
            Intensity::Low => 0,
            Intensity::Medium => 100,
            Intensity::High => 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_grams: u32,
    pub carbs_grams: u32,
    pub fat_grams: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub name: &'static str,
    pub time: &'static str,
    pub calories: u32,
    pub foods: &'static [&'static str],
    pub tips: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionPlan {
    pub calories: u32,
    pub macros: Macros,
    pub meals: Vec<Meal>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NutritionError {
    #[error("Age must be a positive number of years ({0})")]
    InvalidAge(u32),
    #[error("Weight must be a positive number of kilograms ({0})")]
    InvalidWeight(f64),
    #[error("Height must be a positive number of centimeters ({0})")]
    InvalidHeight(f64),
}

/// Daily calories, macros and meals for the given body, goal and training intensity.
pub fn nutrition_plan(
    metrics: &BodyMetrics,
    goal: FitnessGoal,
    intensity: Intensity,
) -> Result<NutritionPlan, NutritionError> {
    let calories = target_calories(maintenance_calories(metrics)?, goal, intensity);

    Ok(NutritionPlan {
        calories,
        macros: macros(calories, goal),
        meals: meal_plan(calories),
    })
}

/// Harris-Benedict basal metabolic rate scaled by an activity factor for the weekly workout
/// frequency.
///
/// Unspecified sex uses the female equation. No or zero workouts per week count as three, more
/// than five as five.
pub fn maintenance_calories(metrics: &BodyMetrics) -> Result<u32, NutritionError> {
    let age = metrics.age_years.unwrap_or(DEFAULT_AGE_YEARS);
    let weight = metrics.weight_kg.unwrap_or(crate::DEFAULT_BODY_WEIGHT_KG);
    let height = metrics.height_cm.unwrap_or(DEFAULT_HEIGHT_CM);

    if age == 0 {
        return Err(NutritionError::InvalidAge(age));
    }
    if !weight.is_finite() || weight <= 0.0 {
        return Err(NutritionError::InvalidWeight(weight));
    }
    if !height.is_finite() || height <= 0.0 {
        return Err(NutritionError::InvalidHeight(height));
    }

    let age = f64::from(age);
    let bmr = match metrics.sex {
        Some(Sex::Male) => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Some(Sex::Female) | None => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
    };

    let activity_factor = match metrics
        .workouts_per_week
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_WORKOUTS_PER_WEEK)
    {
        1 => 1.2,
        2 => 1.375,
        3 => 1.55,
        4 => 1.725,
        _ => 1.9,
    };

    Ok(rounded(bmr * activity_factor))
}

/// Shift maintenance calories by the goal's surplus or deficit and the intensity bonus.
#[must_use]
pub fn target_calories(maintenance: u32, goal: FitnessGoal, intensity: Intensity) -> u32 {
    let adjustment = match goal {
        FitnessGoal::WeightLoss => -500,
        FitnessGoal::MuscleGain => 300,
        FitnessGoal::Strength => 250,
        FitnessGoal::Endurance => 200,
        FitnessGoal::Flexibility | FitnessGoal::GeneralFitness => 0,
    };
    let calories = i64::from(maintenance) + adjustment + intensity.extra_calories();
    u32::try_from(calories.max(0)).unwrap_or(u32::MAX)
}

#[must_use]
pub fn macros(calories: u32, goal: FitnessGoal) -> Macros {
    let (protein, carbs, fat) = match goal {
        FitnessGoal::WeightLoss => (0.30, 0.35, 0.35),
        FitnessGoal::MuscleGain => (0.30, 0.45, 0.25),
        FitnessGoal::Endurance => (0.20, 0.55, 0.25),
        FitnessGoal::Strength => (0.35, 0.35, 0.30),
        FitnessGoal::Flexibility | FitnessGoal::GeneralFitness => (0.25, 0.45, 0.30),
    };
    let calories = f64::from(calories);

    Macros {
        protein_grams: rounded(calories * protein / PROTEIN_KCAL_PER_GRAM),
        carbs_grams: rounded(calories * carbs / CARBS_KCAL_PER_GRAM),
        fat_grams: rounded(calories * fat / FAT_KCAL_PER_GRAM),
    }
}

/// Split the daily calories over five meals.
#[must_use]
pub fn meal_plan(calories: u32) -> Vec<Meal> {
    MEALS
        .iter()
        .map(|meal| Meal {
            name: meal.name,
            time: meal.time,
            calories: rounded(f64::from(calories) * meal.share),
            foods: meal.foods,
            tips: meal.tips,
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

struct MealTemplate {
    name: &'static str,
    time: &'static str,
    share: f64,
    foods: &'static [&'static str],
    tips: &'static str,
}

static MEALS: [MealTemplate; 5] = [
    MealTemplate {
        name: "Breakfast",
        time: "7:00 AM",
        share: 0.25,
        foods: &["Oatmeal with berries", "Greek yogurt", "Almonds", "Banana"],
        tips: "Start your day with complex carbs and protein for sustained energy.",
    },
    MealTemplate {
        name: "Lunch",
        time: "12:30 PM",
        share: 0.3,
        foods: &[
            "Grilled chicken breast",
            "Quinoa",
            "Mixed vegetables",
            "Avocado",
        ],
        tips: "Balance protein and carbs to fuel your afternoon activities.",
    },
    MealTemplate {
        name: "Pre-Workout Snack",
        time: "4:00 PM",
        share: 0.1,
        foods: &["Apple with almond butter", "Green tea"],
        tips: "Light snack 1-2 hours before workout for optimal energy.",
    },
    MealTemplate {
        name: "Post-Workout",
        time: "6:30 PM",
        share: 0.15,
        foods: &["Protein shake", "Banana", "Handful of dates"],
        tips: "Protein and fast carbs within 30 minutes post-workout for recovery.",
    },
    MealTemplate {
        name: "Dinner",
        time: "8:00 PM",
        share: 0.2,
        foods: &["Salmon", "Sweet potato", "Steamed broccoli", "Mixed salad"],
        tips: "Focus on lean protein and vegetables for evening meal.",
    },
];
