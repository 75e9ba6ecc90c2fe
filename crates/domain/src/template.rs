use std::sync::LazyLock;

use log::debug;
use serde::Serialize;

use crate::{
    DemoLibrary, Demonstrated, Difficulty, Equipment, ExerciseSpec, ExperienceLevel, FitnessGoal,
    GeneratedWorkout, Reps, Sets, UserProfile, WorkoutExercise, WorkoutType,
};

/// Rule-based workout construction, used whenever no external generator is available.
pub struct TemplateLibrary {
    demos: &'static DemoLibrary,
}

impl TemplateLibrary {
    #[must_use]
    pub fn new(demos: &'static DemoLibrary) -> Self {
        Self { demos }
    }

    #[must_use]
    pub fn builtin() -> &'static TemplateLibrary {
        static LIBRARY: LazyLock<TemplateLibrary> =
            LazyLock::new(|| TemplateLibrary::new(DemoLibrary::builtin()));
        &LIBRARY
    }

    /// Select the goal template, adapt it to the experience level and cut it to fit the
    /// available time (roughly eight minutes per exercise, three to seven exercises).
    #[must_use]
    pub fn generate_exercises(&self, profile: &UserProfile) -> Vec<ExerciseSpec> {
        let template = goal_template(profile);
        let count = usize::try_from((profile.workout_duration_minutes / 8).clamp(3, 7))
            .unwrap_or(3);

        template
            .iter()
            .take(count)
            .map(|exercise| exercise.adjusted(profile.experience_level))
            .collect()
    }

    #[must_use]
    pub fn generate(&self, profile: &UserProfile) -> GeneratedWorkout {
        let goal = profile.fitness_goal.as_ref().replace('_', " ");
        GeneratedWorkout {
            title: format!("{} Workout", goal.to_uppercase()),
            description: format!(
                "A {} {goal} workout designed for your fitness goals.",
                profile.experience_level
            ),
            exercises: self.generate_exercises(profile),
            duration_minutes: profile.workout_duration_minutes,
            difficulty: Difficulty::for_level(profile.experience_level),
        }
    }

    /// Fixed routine of a specialized workout type, ready to be executed.
    ///
    /// Unknown types get a generic warm-up, main exercise and cool-down.
    #[must_use]
    pub fn specialized_exercises(&self, type_id: &str) -> Vec<Demonstrated<WorkoutExercise>> {
        let routine = ROUTINES
            .iter()
            .find(|(id, _)| *id == type_id)
            .map_or_else(
                || {
                    debug!("no routine for workout type {type_id:?}, using default routine");
                    DEFAULT_ROUTINE.as_slice()
                },
                |(_, routine)| *routine,
            );

        self.demos.attach(
            routine
                .iter()
                .map(|exercise| WorkoutExercise::new(exercise.to_spec()))
                .collect(),
        )
    }

    #[must_use]
    pub fn specialized(&self, workout_type: &WorkoutType) -> SpecializedWorkout {
        SpecializedWorkout {
            workout_type: workout_type.id.to_string(),
            title: workout_type.name.to_string(),
            description: workout_type.description.to_string(),
            exercises: self.specialized_exercises(workout_type.id),
            duration_minutes: workout_type.duration_minutes,
            difficulty: Difficulty::for_routine(workout_type.difficulty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecializedWorkout {
    pub workout_type: String,
    pub title: String,
    pub description: String,
    pub exercises: Vec<Demonstrated<WorkoutExercise>>,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

fn goal_template(profile: &UserProfile) -> &'static [TemplateExercise] {
    match profile.fitness_goal {
        FitnessGoal::Strength if profile.has_equipment(Equipment::Dumbbells) => {
            &STRENGTH_DUMBBELLS
        }
        FitnessGoal::Strength => &STRENGTH_BODYWEIGHT,
        FitnessGoal::Endurance => &ENDURANCE,
        _ => &WEIGHT_LOSS,
    }
}

struct TemplateExercise {
    name: &'static str,
    sets: Sets,
    reps: &'static str,
    rest_seconds: u32,
    target: &'static str,
}

impl TemplateExercise {
    fn adjusted(&self, level: ExperienceLevel) -> ExerciseSpec {
        let mut spec = ExerciseSpec {
            name: self.name.to_string(),
            sets: self.sets,
            reps: Reps::from(self.reps),
            rest_seconds: self.rest_seconds,
            notes: format!("Focus on proper form. Target: {}", self.target),
        };

        match level {
            ExperienceLevel::Beginner => {
                spec.sets = spec.sets.decrease(1, Sets::of(2));
                if let Reps::Count(count) = spec.reps {
                    spec.reps = Reps::Count(count.saturating_sub(2).max(5));
                }
            }
            ExperienceLevel::Intermediate => {}
            ExperienceLevel::Advanced => {
                spec.sets = spec.sets.increase(1);
                spec.rest_seconds = spec.rest_seconds.saturating_sub(15);
            }
        }

        spec
    }
}

struct RoutineExercise {
    name: &'static str,
    sets: Sets,
    reps: &'static str,
    rest_seconds: u32,
    notes: &'static str,
}

impl RoutineExercise {
    fn to_spec(&self) -> ExerciseSpec {
        ExerciseSpec {
            name: self.name.to_string(),
            sets: self.sets,
            reps: Reps::from(self.reps),
            rest_seconds: self.rest_seconds,
            notes: self.notes.to_string(),
        }
    }
}

const fn template(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest_seconds: u32,
    target: &'static str,
) -> TemplateExercise {
    TemplateExercise {
        name,
        sets: Sets::of(sets),
        reps,
        rest_seconds,
        target,
    }
}

const fn routine(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest_seconds: u32,
    notes: &'static str,
) -> RoutineExercise {
    RoutineExercise {
        name,
        sets: Sets::of(sets),
        reps,
        rest_seconds,
        notes,
    }
}

static STRENGTH_BODYWEIGHT: [TemplateExercise; 5] = [
    template("Push-ups", 3, "8-12", 60, "chest"),
    template("Squats", 3, "12-15", 60, "legs"),
    template("Plank", 3, "30-60 seconds", 60, "core"),
    template("Lunges", 3, "10 each leg", 60, "legs"),
    template("Mountain Climbers", 3, "20 total", 60, "core"),
];

static STRENGTH_DUMBBELLS: [TemplateExercise; 5] = [
    template("Dumbbell Chest Press", 3, "8-12", 90, "chest"),
    template("Dumbbell Rows", 3, "10-12", 90, "back"),
    template("Dumbbell Squats", 3, "12-15", 90, "legs"),
    template("Dumbbell Shoulder Press", 3, "8-10", 90, "shoulders"),
    template("Dumbbell Bicep Curls", 3, "10-12", 60, "arms"),
];

static ENDURANCE: [TemplateExercise; 5] = [
    template("Jumping Jacks", 4, "30 seconds", 30, "full body"),
    template("Burpees", 3, "5-10", 45, "full body"),
    template("High Knees", 4, "30 seconds", 30, "cardio"),
    template("Push-ups", 3, "10-15", 45, "upper body"),
    template("Squat Jumps", 3, "10-15", 45, "legs"),
];

static WEIGHT_LOSS: [TemplateExercise; 5] = [
    template("Burpees", 3, "5-8", 60, "full body"),
    template("Jump Squats", 3, "12-15", 60, "legs"),
    template("Mountain Climbers", 3, "30 seconds", 60, "core"),
    template("Push-ups", 3, "8-12", 60, "upper body"),
    template("Plank to Downward Dog", 3, "10-12", 60, "core"),
];

static DEFAULT_ROUTINE: [RoutineExercise; 3] = [
    routine("Warm-up", 1, "5 minutes", 0, "Light movement to prepare body"),
    routine("Main Exercise", 3, "12 reps", 60, "Focus on proper form"),
    routine("Cool Down", 1, "5 minutes", 0, "Gentle stretching"),
];

static ROUTINES: [(&str, &[RoutineExercise]); 7] = [
    (
        "morning-yoga",
        &[
            routine("Sun Salutation A", 3, "5 breaths", 30, "Flow slowly with breath"),
            routine(
                "Warrior II Pose",
                2,
                "45 seconds each side",
                30,
                "Keep front thigh parallel to ground",
            ),
            routine(
                "Tree Pose",
                2,
                "30 seconds each side",
                15,
                "Focus on balance and breathing",
            ),
            routine("Child's Pose", 1, "2 minutes", 0, "Relaxation and rest"),
        ],
    ),
    (
        "meditation-breathwork",
        &[
            routine("Deep Breathing", 1, "5 minutes", 0, "4-7-8 breathing technique"),
            routine("Body Scan Meditation", 1, "8 minutes", 0, "Focus on each body part"),
            routine(
                "Gratitude Practice",
                1,
                "2 minutes",
                0,
                "Think of 3 things you're grateful for",
            ),
        ],
    ),
    (
        "trail-running",
        &[
            routine(
                "Dynamic Warm-up",
                1,
                "5 minutes",
                0,
                "Leg swings, high knees, butt kicks",
            ),
            routine(
                "Trail Running Intervals",
                6,
                "3 minutes hard, 2 minutes easy",
                120,
                "Vary pace based on terrain",
            ),
            routine("Hill Sprints", 4, "30 seconds", 90, "Run uphill at 85% effort"),
            routine("Cool Down Walk", 1, "5 minutes", 0, "Gradual pace reduction"),
        ],
    ),
    (
        "hiit-blast",
        &[
            routine("Jumping Jacks", 3, "30 seconds", 15, "Keep core tight"),
            routine("Burpees", 3, "20 seconds", 20, "Land softly"),
            routine("Mountain Climbers", 3, "30 seconds", 15, "Keep hips level"),
            routine("Plank Hold", 2, "45 seconds", 30, "Maintain straight line"),
        ],
    ),
    (
        "basketball-drills",
        &[
            routine("Dribbling Drills", 3, "2 minutes", 60, "Both hands, various speeds"),
            routine("Defensive Slides", 4, "30 seconds", 45, "Stay low, quick feet"),
            routine("Jump Shots", 5, "10 shots", 90, "Focus on form and follow-through"),
            routine("Suicide Runs", 3, "1 set", 120, "Touch each line and return"),
        ],
    ),
    (
        "lower-back-rehab",
        &[
            routine("Cat-Cow Stretch", 2, "10 reps", 30, "Slow, controlled movement"),
            routine("Pelvic Tilts", 2, "15 reps", 30, "Engage core gently"),
            routine(
                "Knee-to-Chest Stretch",
                2,
                "30 seconds each leg",
                30,
                "Gentle pull, no bouncing",
            ),
            routine("Bird Dog", 2, "10 each side", 30, "Maintain neutral spine"),
        ],
    ),
    (
        "desk-break",
        &[
            routine("Neck Rolls", 2, "5 each direction", 15, "Slow and gentle"),
            routine("Shoulder Shrugs", 2, "10 reps", 15, "Hold for 2 seconds at top"),
            routine(
                "Seated Spinal Twist",
                2,
                "30 seconds each side",
                15,
                "Keep feet flat on floor",
            ),
            routine("Ankle Circles", 2, "10 each direction", 15, "Both feet simultaneously"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::workout_type;

    fn profile(
        fitness_goal: FitnessGoal,
        experience_level: ExperienceLevel,
        available_equipment: &[Equipment],
        workout_duration_minutes: u32,
    ) -> UserProfile {
        UserProfile {
            fitness_goal,
            experience_level,
            available_equipment: available_equipment.iter().copied().collect(),
            workout_duration_minutes,
        }
    }

    fn names(exercises: &[ExerciseSpec]) -> Vec<&str> {
        exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[rstest]
    #[case::strength_dumbbells(FitnessGoal::Strength, &[Equipment::Dumbbells], "Dumbbell Chest Press")]
    #[case::strength_bodyweight(FitnessGoal::Strength, &[Equipment::Barbell], "Push-ups")]
    #[case::endurance(FitnessGoal::Endurance, &[Equipment::Dumbbells], "Jumping Jacks")]
    #[case::weight_loss(FitnessGoal::WeightLoss, &[], "Burpees")]
    #[case::flexibility(FitnessGoal::Flexibility, &[Equipment::YogaMat], "Burpees")]
    #[case::general_fitness(FitnessGoal::GeneralFitness, &[], "Burpees")]
    fn test_generate_exercises_template_selection(
        #[case] goal: FitnessGoal,
        #[case] equipment: &[Equipment],
        #[case] first: &str,
    ) {
        let exercises = TemplateLibrary::builtin()
            .generate_exercises(&profile(goal, ExperienceLevel::Intermediate, equipment, 45));

        assert_eq!(exercises[0].name, first);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(16, 3)]
    #[case(24, 3)]
    #[case(32, 4)]
    #[case(45, 5)]
    #[case(120, 5)]
    fn test_generate_exercises_count(#[case] duration: u32, #[case] expected: usize) {
        let exercises = TemplateLibrary::builtin().generate_exercises(&profile(
            FitnessGoal::WeightLoss,
            ExperienceLevel::Intermediate,
            &[],
            duration,
        ));

        assert_eq!(exercises.len(), expected);
    }

    #[test]
    fn test_generate_exercises_prefix_of_template() {
        let exercises = TemplateLibrary::builtin().generate_exercises(&profile(
            FitnessGoal::Endurance,
            ExperienceLevel::Intermediate,
            &[],
            16,
        ));

        assert_eq!(
            names(&exercises),
            vec!["Jumping Jacks", "Burpees", "High Knees"]
        );
    }

    #[test]
    fn test_generate_exercises_beginner() {
        let exercises = TemplateLibrary::builtin().generate_exercises(&profile(
            FitnessGoal::Strength,
            ExperienceLevel::Beginner,
            &[],
            40,
        ));

        assert_eq!(exercises[0].sets, Sets::of(2));
        assert_eq!(exercises[0].reps, Reps::Descriptive("8-12".to_string()));
        assert_eq!(exercises[0].rest_seconds, 60);
        assert_eq!(exercises[1].reps, Reps::Descriptive("12-15".to_string()));
        assert_eq!(exercises[2].reps, Reps::Descriptive("30-60 seconds".to_string()));
    }

    #[rstest]
    #[case::reduced("12", 3, Sets::of(2), Reps::Count(10))]
    #[case::reps_floor("6", 3, Sets::of(2), Reps::Count(5))]
    #[case::sets_floor("10", 2, Sets::of(2), Reps::Count(8))]
    #[case::descriptive("8-12", 4, Sets::of(3), Reps::Descriptive("8-12".to_string()))]
    fn test_adjusted_beginner(
        #[case] reps: &'static str,
        #[case] sets: u32,
        #[case] expected_sets: Sets,
        #[case] expected_reps: Reps,
    ) {
        let exercise = template("Floor Press", sets, reps, 60, "chest")
            .adjusted(ExperienceLevel::Beginner);

        assert_eq!(exercise.sets, expected_sets);
        assert_eq!(exercise.reps, expected_reps);
        assert_eq!(exercise.rest_seconds, 60);
    }

    #[test]
    fn test_generate_exercises_beginner_sets_floor() {
        let exercises = TemplateLibrary::builtin().generate_exercises(&profile(
            FitnessGoal::Endurance,
            ExperienceLevel::Beginner,
            &[],
            40,
        ));

        assert_eq!(
            exercises.iter().map(|e| u32::from(e.sets)).collect::<Vec<_>>(),
            vec![3, 2, 3, 2, 2]
        );
    }

    #[test]
    fn test_generate_exercises_advanced() {
        let exercises = TemplateLibrary::builtin().generate_exercises(&profile(
            FitnessGoal::Strength,
            ExperienceLevel::Advanced,
            &[Equipment::Dumbbells],
            40,
        ));

        assert_eq!(exercises[0].sets, Sets::of(4));
        assert_eq!(exercises[0].reps, Reps::Descriptive("8-12".to_string()));
        assert_eq!(
            exercises.iter().map(|e| e.rest_seconds).collect::<Vec<_>>(),
            vec![75, 75, 75, 75, 45]
        );
    }

    #[test]
    fn test_adjusted_rest_never_negative() {
        let exercise = template("Quick Hops", 2, "10", 10, "calves");

        assert_eq!(exercise.adjusted(ExperienceLevel::Advanced).rest_seconds, 0);
    }

    #[test]
    fn test_generate_exercises_notes() {
        let exercises = TemplateLibrary::builtin().generate_exercises(&profile(
            FitnessGoal::WeightLoss,
            ExperienceLevel::Intermediate,
            &[],
            24,
        ));

        assert_eq!(
            exercises
                .iter()
                .map(|e| e.notes.as_str())
                .collect::<Vec<_>>(),
            vec![
                "Focus on proper form. Target: full body",
                "Focus on proper form. Target: legs",
                "Focus on proper form. Target: core",
            ]
        );
    }

    #[rstest]
    #[case(
        FitnessGoal::WeightLoss,
        ExperienceLevel::Beginner,
        "WEIGHT LOSS Workout",
        "A beginner weight loss workout designed for your fitness goals.",
        Difficulty::VERY_EASY
    )]
    #[case(
        FitnessGoal::Strength,
        ExperienceLevel::Intermediate,
        "STRENGTH Workout",
        "A intermediate strength workout designed for your fitness goals.",
        Difficulty::MODERATE
    )]
    #[case(
        FitnessGoal::GeneralFitness,
        ExperienceLevel::Advanced,
        "GENERAL FITNESS Workout",
        "A advanced general fitness workout designed for your fitness goals.",
        Difficulty::VERY_HARD
    )]
    fn test_generate(
        #[case] goal: FitnessGoal,
        #[case] level: ExperienceLevel,
        #[case] title: &str,
        #[case] description: &str,
        #[case] difficulty: Difficulty,
    ) {
        let workout = TemplateLibrary::builtin().generate(&profile(goal, level, &[], 30));

        assert_eq!(workout.title, title);
        assert_eq!(workout.description, description);
        assert_eq!(workout.difficulty, difficulty);
        assert_eq!(workout.duration_minutes, 30);
        assert!(workout.is_usable());
    }

    #[test]
    fn test_specialized_exercises() {
        let exercises = TemplateLibrary::builtin().specialized_exercises("hiit-blast");

        assert_eq!(
            exercises.iter().map(|e| e.exercise.spec.name.as_str()).collect::<Vec<_>>(),
            vec!["Jumping Jacks", "Burpees", "Mountain Climbers", "Plank Hold"]
        );
        assert!(exercises.iter().all(|e| !e.exercise.completed));
        assert!(exercises.iter().all(Demonstrated::has_demo));
        assert_eq!(
            exercises[3].exercise.spec.reps,
            Reps::Descriptive("45 seconds".to_string())
        );
        assert_eq!(exercises[3].exercise.spec.notes, "Maintain straight line");
    }

    #[test]
    fn test_specialized_exercises_fresh_ids() {
        let first = TemplateLibrary::builtin().specialized_exercises("desk-break");
        let second = TemplateLibrary::builtin().specialized_exercises("desk-break");
        let ids = first
            .iter()
            .chain(&second)
            .map(|e| e.exercise.id)
            .collect::<BTreeSet<_>>();

        assert_eq!(ids.len(), first.len() + second.len());
    }

    #[rstest]
    #[case("knee-recovery")]
    #[case("unknown-type")]
    #[case("")]
    fn test_specialized_exercises_default_routine(#[case] type_id: &str) {
        let exercises = TemplateLibrary::builtin().specialized_exercises(type_id);

        assert_eq!(
            exercises.iter().map(|e| e.exercise.spec.name.as_str()).collect::<Vec<_>>(),
            vec!["Warm-up", "Main Exercise", "Cool Down"]
        );
        assert!(exercises.iter().all(|e| !e.has_demo()));
    }

    #[test]
    fn test_routines_known_workout_types() {
        for (id, routine) in &ROUTINES {
            assert!(workout_type(id).is_some(), "{id} is not a workout type");
            assert!(!routine.is_empty());
        }
    }

    #[rstest]
    #[case("morning-yoga", Difficulty::EASY, 30, 4)]
    #[case("trail-running", Difficulty::MODERATE, 45, 4)]
    #[case("cycling-tour", Difficulty::MODERATE, 60, 3)]
    fn test_specialized(
        #[case] type_id: &str,
        #[case] difficulty: Difficulty,
        #[case] duration_minutes: u32,
        #[case] exercise_count: usize,
    ) {
        let workout_type = workout_type(type_id).unwrap();
        let workout = TemplateLibrary::builtin().specialized(workout_type);

        assert_eq!(workout.workout_type, type_id);
        assert_eq!(workout.title, workout_type.name);
        assert_eq!(workout.description, workout_type.description);
        assert_eq!(workout.difficulty, difficulty);
        assert_eq!(workout.duration_minutes, duration_minutes);
        assert_eq!(workout.exercises.len(), exercise_count);
    }

    #[test]
    fn test_specialized_serialize_flattened() {
        let workout = TemplateLibrary::builtin().specialized(workout_type("morning-yoga").unwrap());
        let value = serde_json::to_value(&workout).unwrap();
        let exercise = &value["exercises"][3];

        assert_eq!(exercise["name"], "Child's Pose");
        assert_eq!(exercise["sets"], 1);
        assert_eq!(exercise["reps"], "2 minutes");
        assert_eq!(exercise["completed"], false);
        assert!(exercise["video_url"].is_string());
        assert_eq!(value["difficulty"], 2);
    }
}
