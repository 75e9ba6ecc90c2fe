use std::fmt;

use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Anything that carries an exercise name.
///
/// The knowledge base, the calorie estimator and the muscle-group tagger only look at names,
/// so they accept any exercise-like value through this trait.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSpec {
    pub name: String,
    pub sets: Sets,
    pub reps: Reps,
    pub rest_seconds: u32,
    #[serde(default)]
    pub notes: String,
}

impl Named for ExerciseSpec {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Sets(u32);

impl Sets {
    pub const ONE: Sets = Sets(1);

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value == 0 {
            return Err(SetsError::Zero);
        }

        Ok(Self(value))
    }

    /// Constructor for static tables, checked at compile time.
    pub(crate) const fn of(value: u32) -> Self {
        assert!(value > 0, "number of sets must be positive");
        Self(value)
    }

    #[must_use]
    pub fn increase(self, n: u32) -> Self {
        Self(self.0.saturating_add(n))
    }

    #[must_use]
    pub fn decrease(self, n: u32, floor: Sets) -> Self {
        Self(self.0.saturating_sub(n).max(floor.0))
    }
}

impl TryFrom<u32> for Sets {
    type Error = SetsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Sets::new(value)
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be at least 1")]
    Zero,
    #[error("Sets must be an integer")]
    ParseError,
}

/// Target repetitions: either a count or a free-text prescription like "30 seconds".
///
/// Numeric strings deserialize to [`Reps::Count`], the same as [`Reps::from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Descriptive(String),
}

impl Reps {
    #[must_use]
    pub fn count(&self) -> Option<u32> {
        match self {
            Reps::Count(count) => Some(*count),
            Reps::Descriptive(_) => None,
        }
    }
}

impl From<u32> for Reps {
    fn from(value: u32) -> Self {
        Reps::Count(value)
    }
}

impl From<&str> for Reps {
    fn from(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(count) => Reps::Count(count),
            Err(_) => Reps::Descriptive(value.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Reps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawReps {
            Count(u32),
            Text(String),
        }

        Ok(match RawReps::deserialize(deserializer)? {
            RawReps::Count(count) => Reps::Count(count),
            RawReps::Text(text) => Reps::from(text.as_str()),
        })
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(count) => write!(f, "{count}"),
            Reps::Descriptive(description) => write!(f, "{description}"),
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
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

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// An exercise as it is being executed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: ExerciseID,
    #[serde(flatten)]
    pub spec: ExerciseSpec,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_notes: Option<String>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn new(spec: ExerciseSpec) -> Self {
        Self {
            id: ExerciseID::random(),
            spec,
            completed: false,
            performance_notes: None,
        }
    }

    pub fn complete(&mut self, performance_notes: Option<String>) {
        self.completed = true;
        if performance_notes.is_some() {
            self.performance_notes = performance_notes;
        }
    }
}

impl Named for WorkoutExercise {
    fn name(&self) -> &str {
        &self.spec.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Err(SetsError::Zero))]
    #[case(1, Ok(Sets(1)))]
    #[case(12, Ok(Sets(12)))]
    fn test_sets_new(#[case] input: u32, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::new(input), expected);
    }

    #[rstest]
    #[case("3", Ok(Sets(3)))]
    #[case(" 4 ", Ok(Sets(4)))]
    #[case("0", Err(SetsError::Zero))]
    #[case("three", Err(SetsError::ParseError))]
    #[case("", Err(SetsError::ParseError))]
    fn test_sets_from_str(#[case] input: &str, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::try_from(input), expected);
    }

    #[rstest]
    #[case(Sets(3), 1, Sets(2), Sets(2))]
    #[case(Sets(2), 1, Sets(2), Sets(2))]
    #[case(Sets(1), 5, Sets::ONE, Sets(1))]
    fn test_sets_decrease(
        #[case] sets: Sets,
        #[case] n: u32,
        #[case] floor: Sets,
        #[case] expected: Sets,
    ) {
        assert_eq!(sets.decrease(n, floor), expected);
    }

    #[test]
    fn test_sets_increase() {
        assert_eq!(Sets(3).increase(1), Sets(4));
        assert_eq!(Sets(u32::MAX).increase(1), Sets(u32::MAX));
    }

    #[rstest]
    #[case("12", Reps::Count(12))]
    #[case("30 seconds", Reps::Descriptive("30 seconds".to_string()))]
    #[case("8-12", Reps::Descriptive("8-12".to_string()))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Reps) {
        assert_eq!(Reps::from(input), expected);
    }

    #[rstest]
    #[case::number("12", Reps::Count(12))]
    #[case::numeric_string("\"12\"", Reps::Count(12))]
    #[case::padded_numeric_string("\" 8 \"", Reps::Count(8))]
    #[case::range("\"8-12\"", Reps::Descriptive("8-12".to_string()))]
    #[case::duration("\"45 seconds\"", Reps::Descriptive("45 seconds".to_string()))]
    fn test_reps_deserialize(#[case] json: &str, #[case] expected: Reps) {
        assert_eq!(serde_json::from_str::<Reps>(json).unwrap(), expected);
        if let Ok(text) = serde_json::from_str::<String>(json) {
            assert_eq!(Reps::from(text.as_str()), expected);
        }
    }

    #[rstest]
    #[case(Reps::Count(10), "10")]
    #[case(Reps::Descriptive("to failure".to_string()), "to failure")]
    fn test_reps_display(#[case] input: Reps, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[test]
    fn test_exercise_spec_deserialize_mixed_reps() {
        let exercises: Vec<ExerciseSpec> = serde_json::from_str(
            r#"[
                { "name": "Push-ups", "sets": 3, "reps": 12, "rest_seconds": 60, "notes": "" },
                { "name": "Plank", "sets": 2, "reps": "45 seconds", "rest_seconds": 30 }
            ]"#,
        )
        .unwrap();

        assert_eq!(exercises[0].reps, Reps::Count(12));
        assert_eq!(
            exercises[1].reps,
            Reps::Descriptive("45 seconds".to_string())
        );
        assert_eq!(exercises[1].notes, "");
    }

    #[test]
    fn test_exercise_spec_deserialize_zero_sets() {
        assert!(
            serde_json::from_str::<ExerciseSpec>(
                r#"{ "name": "Squats", "sets": 0, "reps": 10, "rest_seconds": 60 }"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_workout_exercise_complete() {
        let mut exercise = WorkoutExercise::new(ExerciseSpec {
            name: "Squats".to_string(),
            sets: Sets(3),
            reps: Reps::Count(10),
            rest_seconds: 60,
            notes: String::new(),
        });

        assert!(!exercise.completed);
        assert!(!exercise.id.is_nil());

        exercise.complete(Some("felt strong".to_string()));

        assert!(exercise.completed);
        assert_eq!(exercise.performance_notes.as_deref(), Some("felt strong"));
    }

    #[test]
    fn test_workout_exercise_serialize_flattened() {
        let exercise = WorkoutExercise {
            id: 1.into(),
            spec: ExerciseSpec {
                name: "Plank".to_string(),
                sets: Sets(2),
                reps: Reps::Descriptive("45 seconds".to_string()),
                rest_seconds: 30,
                notes: "Maintain straight line".to_string(),
            },
            completed: false,
            performance_notes: None,
        };

        assert_eq!(
            serde_json::to_value(&exercise).unwrap(),
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Plank",
                "sets": 2,
                "reps": "45 seconds",
                "rest_seconds": 30,
                "notes": "Maintain straight line",
                "completed": false
            })
        );
    }
}
