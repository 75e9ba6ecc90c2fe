use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};
use fitcoach_domain::{
    Achievement, BodyMetrics, CalorieError, CalorieEstimate, DayActivity, DemoLibrary,
    Demonstrated, Difficulty, ExerciseSpec, GeneratedWorkout, Intensity, MetTable, MonthlyStats,
    MuscleGroup, MuscleGroupTable, NutritionError, NutritionPlan, SpecializedWorkout, Streaks,
    TemplateLibrary, UserProfile, WorkoutAnalytics, WorkoutRecord, analyze, compute_achievements,
    compute_streaks, monthly_stats, nutrition_plan, weekly_activity, workout_type,
};
use log::{debug, error, info, warn};
use serde::Serialize;

use crate::{GenerationRequest, GeneratorError, Settings, WorkoutGenerator};

macro_rules! log_on_error {
    ($func: expr, $action: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            match err {
                GeneratorError::Unavailable => debug!("failed to {}: {err}", $action),
                GeneratorError::Timeout => warn!("failed to {}: {err}", $action),
                _ => error!("failed to {}: {err}", $action),
            }
        }
        result
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutSource {
    Generator,
    Template,
}

/// A workout ready to be presented, with demonstrations attached to its exercises.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedWorkout {
    pub title: String,
    pub description: String,
    pub exercises: Vec<Demonstrated<ExerciseSpec>>,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub source: WorkoutSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub streaks: Streaks,
    pub achievements: Vec<Achievement>,
    pub analytics: WorkoutAnalytics,
    pub monthly_stats: Vec<MonthlyStats>,
    pub weekly_activity: Vec<DayActivity>,
    pub muscle_groups: BTreeSet<MuscleGroup>,
}

pub struct Coach<G> {
    generator: G,
    settings: Settings,
    templates: &'static TemplateLibrary,
    demos: &'static DemoLibrary,
    mets: &'static MetTable,
    muscles: &'static MuscleGroupTable,
}

impl<G: WorkoutGenerator> Coach<G> {
    pub fn new(generator: G, settings: Settings) -> Self {
        Self {
            generator,
            settings,
            templates: TemplateLibrary::builtin(),
            demos: DemoLibrary::builtin(),
            mets: MetTable::builtin(),
            muscles: MuscleGroupTable::builtin(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Ask the generator for a workout, falling back to the template workout when it fails
    /// or returns nothing usable.
    pub async fn plan_workout(&self, request: &GenerationRequest) -> PlannedWorkout {
        let (workout, source) = match log_on_error!(
            self.generator.generate_workout(request),
            "generate workout"
        ) {
            Ok(workout) if workout.is_usable() => (workout, WorkoutSource::Generator),
            Ok(workout) => {
                warn!(
                    "generated workout {:?} is unusable, using template workout",
                    workout.title
                );
                (self.template_workout(&request.profile), WorkoutSource::Template)
            }
            Err(_) => {
                info!("using template workout");
                (self.template_workout(&request.profile), WorkoutSource::Template)
            }
        };

        PlannedWorkout {
            title: workout.title,
            description: workout.description,
            exercises: self.demos.attach(workout.exercises),
            duration_minutes: workout.duration_minutes,
            difficulty: workout.difficulty,
            source,
        }
    }

    fn template_workout(&self, profile: &UserProfile) -> GeneratedWorkout {
        self.templates.generate(profile)
    }

    pub fn specialized_workout(&self, type_id: &str) -> Option<SpecializedWorkout> {
        let Some(workout_type) = workout_type(type_id) else {
            debug!("unknown workout type {type_id:?}");
            return None;
        };

        Some(self.templates.specialized(workout_type))
    }

    pub fn estimate(
        &self,
        workout: &PlannedWorkout,
        profile: &UserProfile,
    ) -> Result<CalorieEstimate, CalorieError> {
        self.mets.estimate(
            &workout.exercises,
            f64::from(workout.duration_minutes),
            Some(self.settings.default_body_weight_kg),
            Some(profile.experience_level),
        )
    }

    /// Nutrition plan for the profile's goal. A missing body weight is taken from the settings.
    pub fn nutrition_plan(
        &self,
        metrics: &BodyMetrics,
        profile: &UserProfile,
        intensity: Intensity,
    ) -> Result<NutritionPlan, NutritionError> {
        let metrics = BodyMetrics {
            weight_kg: metrics
                .weight_kg
                .or(Some(self.settings.default_body_weight_kg)),
            ..*metrics
        };
        nutrition_plan(&metrics, profile.fitness_goal, intensity)
    }

    pub fn progress(&self, records: &[WorkoutRecord], now: DateTime<Utc>) -> ProgressReport {
        let time_frame = self.settings.analytics_time_frame;
        let cutoff = now - TimeDelta::days(time_frame.days());
        let recent_exercises = records
            .iter()
            .filter(|r| r.is_completed && r.created_at >= cutoff)
            .flat_map(|r| r.exercises.iter().map(|e| e.name.as_str()))
            .collect::<Vec<_>>();

        ProgressReport {
            streaks: compute_streaks(records, self.settings.streak_window),
            achievements: compute_achievements(records, now),
            analytics: analyze(records, time_frame, now),
            monthly_stats: monthly_stats(records, now),
            weekly_activity: weekly_activity(records, now.date_naive()),
            muscle_groups: self.muscles.targeted_groups(&recent_exercises),
        }
    }
}
