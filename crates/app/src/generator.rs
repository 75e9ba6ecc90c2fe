use fitcoach_domain::{
    Difficulty, ExerciseSpec, GeneratedWorkout, Reps, Sets, UserProfile, WorkoutRecord,
};
use serde::{Deserialize, Serialize};

/// Answers shorter than this cannot contain a workout.
pub const MIN_RESPONSE_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub recent_workouts: Vec<WorkoutRecord>,
}

/// A source of workouts beyond the built-in templates, usually a language model.
#[allow(async_fn_in_trait)]
pub trait WorkoutGenerator {
    async fn generate_workout(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedWorkout, GeneratorError>;
}

#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("workout generator unavailable")]
    Unavailable,
    #[error("workout generator timed out")]
    Timeout,
    #[error("malformed workout: {0}")]
    Malformed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Generator used when no external service is configured.
pub struct NoGenerator;

impl WorkoutGenerator for NoGenerator {
    async fn generate_workout(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GeneratedWorkout, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }
}

#[derive(Deserialize)]
struct RawWorkout {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    exercises: Vec<RawExercise>,
}

#[derive(Deserialize)]
struct RawExercise {
    name: String,
    sets: u32,
    reps: Reps,
    #[serde(default)]
    rest_seconds: u32,
    #[serde(default, alias = "notes")]
    instructions: String,
}

/// Extract a workout from free text containing a JSON object.
///
/// Everything from the first `{` to the last `}` is parsed. Missing durations fall back to
/// `default_duration_minutes`, missing or unknown difficulty labels to moderate.
pub fn parse_generated_workout(
    text: &str,
    default_duration_minutes: u32,
) -> Result<GeneratedWorkout, GeneratorError> {
    if text.trim().len() < MIN_RESPONSE_LENGTH {
        return Err(GeneratorError::Malformed("response too short".to_string()));
    }

    let json = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => return Err(GeneratorError::Malformed("no JSON object found".to_string())),
    };

    let raw = serde_json::from_str::<RawWorkout>(json)
        .map_err(|err| GeneratorError::Malformed(err.to_string()))?;

    let exercises = raw
        .exercises
        .into_iter()
        .map(|exercise| {
            Ok(ExerciseSpec {
                sets: Sets::new(exercise.sets).map_err(|err| {
                    GeneratorError::Malformed(format!("{}: {err}", exercise.name))
                })?,
                name: exercise.name,
                reps: exercise.reps,
                rest_seconds: exercise.rest_seconds,
                notes: exercise.instructions,
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    Ok(GeneratedWorkout {
        title: raw.title,
        description: raw.description,
        exercises,
        duration_minutes: raw.duration.unwrap_or(default_duration_minutes),
        difficulty: raw
            .difficulty
            .as_deref()
            .map_or(Difficulty::MODERATE, Difficulty::from_label),
    })
}
