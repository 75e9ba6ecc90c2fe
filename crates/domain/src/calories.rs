use serde::{Deserialize, Serialize};

use crate::{ExperienceLevel, Named};

pub const DEFAULT_MET: f64 = 6.0;
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieEstimate {
    pub total_calories: u32,
    pub calories_per_minute: u32,
}

/// Ordered keyword table of metabolic equivalents.
///
/// The first keyword contained in an exercise name determines its MET, so more specific
/// keywords have to precede the general ones they contain.
pub struct MetTable {
    entries: &'static [(&'static str, f64)],
}

impl MetTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn builtin() -> &'static MetTable {
        static TABLE: MetTable = MetTable::new(&MET_VALUES);
        &TABLE
    }

    #[must_use]
    pub fn met(&self, name: &str) -> f64 {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map_or(DEFAULT_MET, |(_, met)| *met)
    }

    /// Estimate the energy expenditure of a workout.
    ///
    /// `body_weight_kg` defaults to [`DEFAULT_BODY_WEIGHT_KG`] and `level` to intermediate.
    pub fn estimate<T: Named>(
        &self,
        exercises: &[T],
        duration_minutes: f64,
        body_weight_kg: Option<f64>,
        level: Option<ExperienceLevel>,
    ) -> Result<CalorieEstimate, CalorieError> {
        if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
            return Err(CalorieError::InvalidDuration(duration_minutes));
        }

        let body_weight_kg = body_weight_kg.unwrap_or(DEFAULT_BODY_WEIGHT_KG);

        if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
            return Err(CalorieError::InvalidBodyWeight(body_weight_kg));
        }

        let average_met = if exercises.is_empty() {
            DEFAULT_MET
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = exercises.len() as f64;
            exercises.iter().map(|e| self.met(e.name())).sum::<f64>() / count
        };

        let adjusted_met = average_met * level_multiplier(level.unwrap_or_default());
        let total = (adjusted_met * body_weight_kg * (duration_minutes / 60.0)).round();
        let per_minute = (total / duration_minutes).round();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(CalorieEstimate {
            total_calories: total as u32,
            calories_per_minute: per_minute as u32,
        })
    }
}

fn level_multiplier(level: ExperienceLevel) -> f64 {
    match level {
        ExperienceLevel::Beginner => 0.8,
        ExperienceLevel::Intermediate => 1.0,
        ExperienceLevel::Advanced => 1.2,
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CalorieError {
    #[error("Duration must be a positive number of minutes ({0})")]
    InvalidDuration(f64),
    #[error("Body weight must be a positive number of kilograms ({0})")]
    InvalidBodyWeight(f64),
}

static MET_VALUES: [(&str, f64); 26] = [
    // Strength
    ("push", 6.0),
    ("pull", 6.0),
    ("squat", 7.0),
    ("deadlift", 8.0),
    ("plank", 4.0),
    ("burpee", 10.0),
    ("jumping", 8.0),
    ("lunge", 6.5),
    ("press", 6.0),
    ("row", 6.0),
    ("curl", 4.5),
    ("crunch", 3.5),
    ("mountain", 8.0),
    ("bear", 7.0),
    ("kettlebell", 8.0),
    ("dumbbell", 6.0),
    ("barbell", 7.0),
    ("bodyweight", 5.5),
    // Cardio
    ("run", 10.0),
    ("jog", 7.0),
    ("walk", 3.5),
    ("bike", 8.0),
    ("swim", 9.0),
    ("jump", 8.0),
    ("skip", 8.0),
    ("cardio", 7.0),
];

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::squat("Barbell Squat", 7.0)]
    #[case::first_match_wins("Squat Press", 7.0)]
    #[case::jumping_before_jump("Jumping Jacks", 8.0)]
    #[case::lunge_before_walk("Walking Lunges", 6.5)]
    #[case::curl_before_dumbbell("Dumbbell Curl", 4.5)]
    #[case::cardio("Swimming", 9.0)]
    #[case::case_insensitive("BURPEES", 10.0)]
    #[case::unknown("Tree Pose", DEFAULT_MET)]
    fn test_met(#[case] name: &str, #[case] expected: f64) {
        assert_approx_eq!(MetTable::builtin().met(name), expected);
    }

    #[rstest]
    #[case::empty(&[], 30.0, None, None, 210, 7)]
    #[case::beginner(&["Burpees"], 30.0, Some(70.0), Some(ExperienceLevel::Beginner), 280, 9)]
    #[case::advanced(&["Plank"], 60.0, Some(80.0), Some(ExperienceLevel::Advanced), 384, 6)]
    #[case::average(&["Burpees", "Crunches"], 30.0, None, None, 236, 8)]
    #[case::unknown_exercises(&["Tree Pose", "Neck Rolls"], 30.0, Some(70.0), None, 210, 7)]
    fn test_estimate(
        #[case] exercises: &[&str],
        #[case] duration_minutes: f64,
        #[case] body_weight_kg: Option<f64>,
        #[case] level: Option<ExperienceLevel>,
        #[case] total_calories: u32,
        #[case] calories_per_minute: u32,
    ) {
        assert_eq!(
            MetTable::builtin().estimate(exercises, duration_minutes, body_weight_kg, level),
            Ok(CalorieEstimate {
                total_calories,
                calories_per_minute
            })
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_estimate_invalid_duration(#[case] duration_minutes: f64) {
        assert!(matches!(
            MetTable::builtin().estimate(&["Squats"], duration_minutes, None, None),
            Err(CalorieError::InvalidDuration(_))
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-70.0)]
    #[case(f64::NAN)]
    fn test_estimate_invalid_body_weight(#[case] body_weight_kg: f64) {
        assert!(matches!(
            MetTable::builtin().estimate(&["Squats"], 30.0, Some(body_weight_kg), None),
            Err(CalorieError::InvalidBodyWeight(_))
        ));
    }

    #[test]
    fn test_estimate_monotonic_in_body_weight() {
        let exercises = ["Push-ups", "Squats", "Mountain Climbers"];
        let mut previous = 0;
        for body_weight_kg in [40.0, 55.0, 70.0, 85.0, 100.0, 130.0] {
            let estimate = MetTable::builtin()
                .estimate(&exercises, 45.0, Some(body_weight_kg), None)
                .unwrap();
            assert!(estimate.total_calories >= previous);
            previous = estimate.total_calories;
        }
    }

    #[rstest]
    #[case(10.0)]
    #[case(17.0)]
    #[case(45.0)]
    #[case(90.0)]
    fn test_estimate_total_matches_per_minute(#[case] duration_minutes: f64) {
        let estimate = MetTable::builtin()
            .estimate(&["Burpees", "Plank"], duration_minutes, Some(63.5), None)
            .unwrap();
        let reconstructed = f64::from(estimate.calories_per_minute) * duration_minutes;
        assert!((f64::from(estimate.total_calories) - reconstructed).abs() <= duration_minutes / 2.0);
    }

    #[test]
    fn test_custom_table() {
        static VALUES: [(&str, f64); 1] = [("rowing", 12.0)];
        let table = MetTable::new(&VALUES);

        assert_approx_eq!(table.met("Rowing Machine"), 12.0);
        assert_approx_eq!(table.met("Push-ups"), DEFAULT_MET);
    }
}
