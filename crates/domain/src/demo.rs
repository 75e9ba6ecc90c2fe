use std::{collections::BTreeMap, sync::LazyLock};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Named;

/// Instructional reference for an exercise.
///
/// `variants` lists every normalized (lowercase, trimmed) spelling that resolves to this demo.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ExerciseDemo {
    pub canonical_name: &'static str,
    pub video_url: &'static str,
    pub description: &'static str,
    pub simple_description: &'static str,
    #[serde(skip)]
    pub variants: &'static [&'static str],
}

/// Read-only lookup from exercise names to demonstrations.
pub struct DemoLibrary {
    demos: BTreeMap<&'static str, &'static ExerciseDemo>,
}

impl DemoLibrary {
    #[must_use]
    pub fn new(demos: &'static [ExerciseDemo]) -> Self {
        let mut map = BTreeMap::new();
        for demo in demos {
            for variant in demo.variants {
                if let Some(previous) = map.insert(*variant, demo) {
                    warn!(
                        "demo variant {variant:?} of {} shadows {}",
                        demo.canonical_name, previous.canonical_name
                    );
                }
            }
        }
        Self { demos: map }
    }

    #[must_use]
    pub fn builtin() -> &'static DemoLibrary {
        static LIBRARY: LazyLock<DemoLibrary> = LazyLock::new(|| DemoLibrary::new(&DEMOS));
        &LIBRARY
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static ExerciseDemo> {
        let normalized_name = name.trim().to_lowercase();
        let demo = self.demos.get(normalized_name.as_str()).copied();
        if demo.is_none() {
            debug!("no demo found for {normalized_name:?}");
        }
        demo
    }

    #[must_use]
    pub fn video_url(&self, name: &str) -> Option<&'static str> {
        self.lookup(name).map(|demo| demo.video_url)
    }

    /// Attach demo fields to each exercise, keeping order and all other fields.
    #[must_use]
    pub fn attach<T: Named>(&self, exercises: Vec<T>) -> Vec<Demonstrated<T>> {
        exercises
            .into_iter()
            .map(|exercise| {
                let demo = self.lookup(exercise.name());
                Demonstrated {
                    exercise,
                    video_url: demo.map(|d| d.video_url.to_string()),
                    demo_description: demo.map(|d| d.description.to_string()),
                    simple_description: demo.map(|d| d.simple_description.to_string()),
                }
            })
            .collect()
    }

    pub fn variants(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.demos.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}

/// An exercise with its demonstration fields, flattened when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonstrated<T> {
    #[serde(flatten)]
    pub exercise: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_description: Option<String>,
}

impl<T> Demonstrated<T> {
    #[must_use]
    pub fn has_demo(&self) -> bool {
        self.video_url.is_some()
    }
}

impl<T: Named> Named for Demonstrated<T> {
    fn name(&self) -> &str {
        self.exercise.name()
    }
}

const PUSH_UP_DESCRIPTION: &str = "Start in a plank position with hands under shoulders. Lower your chest to the ground by bending your elbows, then push back up. Keep your body straight like a board.";
const SHOULDER_PRESS_DESCRIPTION: &str = "Hold dumbbells at shoulder height with palms facing forward. Press them straight up overhead until your arms are fully extended, then lower back to shoulders.";

static DEMOS: [ExerciseDemo; 52] = [
    // Bodyweight
    ExerciseDemo {
        canonical_name: "Squat",
        video_url: "https://www.youtube.com/watch?v=YaXPRqUwItQ",
        description: "Perfect squat form demonstration",
        simple_description: "Stand with feet shoulder-width apart, lower your body by bending your knees as if sitting in a chair, then stand back up. Keep your chest up and knees behind your toes.",
        variants: &["squat", "squats", "dumbbell squat", "dumbbell squats"],
    },
    ExerciseDemo {
        canonical_name: "Squat Jump",
        video_url: "https://www.youtube.com/watch?v=CVaEhXotL7M",
        description: "Explosive squat jump technique",
        simple_description: "Perform a regular squat, then explosively jump up as high as you can. Land softly and immediately go into the next squat. Great for building power and burning calories.",
        variants: &["squat jump", "squat jumps", "jump squat", "jump squats"],
    },
    ExerciseDemo {
        canonical_name: "Push-up",
        video_url: "https://www.youtube.com/watch?v=IODxDxX7oi4",
        description: "Proper push-up form tutorial",
        simple_description: PUSH_UP_DESCRIPTION,
        variants: &[
            "push-up", "pushup", "push up", "push-ups", "pushups", "push ups",
        ],
    },
    ExerciseDemo {
        canonical_name: "Modified Push-up",
        video_url: "https://www.youtube.com/watch?v=jWxvty2KROs",
        description: "Beginner push-up modifications",
        simple_description: "Easier version of push-ups. Either do them against a wall while standing, or on your knees instead of your toes. Same arm movement, but less body weight to lift.",
        variants: &[
            "push-ups (against a wall or on knees)",
            "push-ups (on knees if needed)",
            "knee push-ups",
            "wall push-ups",
        ],
    },
    ExerciseDemo {
        canonical_name: "Lunge",
        video_url: "https://www.youtube.com/shorts/1cS-6KsJW9g",
        description: "Perfect lunge technique",
        simple_description: "Step forward with one leg and lower your back knee toward the ground. Your front thigh should be parallel to the floor. Push back to starting position and repeat.",
        variants: &["lunge", "lunges"],
    },
    ExerciseDemo {
        canonical_name: "Walking Lunge",
        video_url: "https://www.youtube.com/watch?v=L8fvypPrzzs",
        description: "Walking lunge demonstration",
        simple_description: "Like regular lunges, but instead of stepping back, you step forward into the next lunge. Move across the room with each step, alternating legs.",
        variants: &["walking lunge", "walking lunges"],
    },
    ExerciseDemo {
        canonical_name: "Plank",
        video_url: "https://www.youtube.com/watch?v=ASdvN_XEl_c",
        description: "How to hold a perfect plank",
        simple_description: "Hold your body straight like a board, supported on your forearms and toes. Keep your core tight and don't let your hips sag or pike up. Hold this position.",
        variants: &["plank", "planks"],
    },
    ExerciseDemo {
        canonical_name: "Plank Hold",
        video_url: "https://www.youtube.com/watch?v=ASdvN_XEl_c",
        description: "Plank hold strengthens the core muscles. Maintain a straight line from head to heels while supporting your body on forearms and toes.",
        simple_description: "Hold straight body position to strengthen core",
        variants: &["plank hold"],
    },
    ExerciseDemo {
        canonical_name: "Burpee",
        video_url: "https://www.youtube.com/watch?v=auBLPXO8Fww",
        description: "Burpee exercise tutorial",
        simple_description: "Start standing, squat down and put hands on floor, jump feet back to plank, do a push-up, jump feet back to squat, then jump up with arms overhead. Full body exercise!",
        variants: &["burpee", "burpees"],
    },
    ExerciseDemo {
        canonical_name: "Jumping Jack",
        video_url: "https://www.youtube.com/watch?v=c4DAnQ6DtF8",
        description: "Jumping jacks proper form",
        simple_description: "Start with feet together and arms at sides. Jump while spreading feet wide and raising arms overhead. Jump back to starting position. Great cardio warm-up!",
        variants: &["jumping jack", "jumping jacks"],
    },
    ExerciseDemo {
        canonical_name: "Mountain Climber",
        video_url: "https://www.youtube.com/watch?v=cnyTQDSE884",
        description: "Mountain climber exercise guide",
        simple_description: "Start in plank position. Quickly alternate bringing each knee toward your chest, like running in place horizontally. Keep your core tight and move fast!",
        variants: &["mountain climber", "mountain climbers"],
    },
    ExerciseDemo {
        canonical_name: "Glute Bridge",
        video_url: "https://www.youtube.com/watch?v=OUgsJ8-Vi0E",
        description: "Glute bridge technique",
        simple_description: "Lie on your back with knees bent. Squeeze your glutes and lift your hips up, creating a straight line from knees to shoulders. Great for strengthening your butt muscles!",
        variants: &["glute bridge", "glute bridges", "bridge"],
    },
    ExerciseDemo {
        canonical_name: "Calf Raise",
        video_url: "https://www.youtube.com/watch?v=gwLzBJYoWlI",
        description: "Calf raise exercise",
        simple_description: "Stand tall and rise up onto your toes by lifting your heels off the ground. Squeeze your calf muscles at the top, then slowly lower back down.",
        variants: &["calf raise", "calf raises"],
    },
    ExerciseDemo {
        canonical_name: "Wall Sit",
        video_url: "https://www.youtube.com/watch?v=y-wV4Venusw",
        description: "Wall sit exercise tutorial",
        simple_description: "Lean your back against a wall and slide down until your thighs are parallel to the floor, like sitting in an invisible chair. Hold this position. Burns your leg muscles!",
        variants: &["wall sit"],
    },
    ExerciseDemo {
        canonical_name: "Sit-up",
        video_url: "https://www.youtube.com/watch?v=1fbU_MkV7NE",
        description: "Proper sit-up technique",
        simple_description: "Lie on your back with knees bent. Use your abdominal muscles to sit all the way up, then slowly lower back down. Keep your feet on the ground.",
        variants: &["sit-up", "situp", "sit up", "sit-ups", "situps", "sit ups"],
    },
    ExerciseDemo {
        canonical_name: "Crunch",
        video_url: "https://www.youtube.com/watch?v=Xyd_fa5zoEU",
        description: "Abdominal crunch exercise",
        simple_description: "Lie on your back with knees bent. Lift just your head and shoulders off the ground by contracting your abs. Don't pull on your neck - use your core muscles.",
        variants: &["crunch", "crunches"],
    },
    ExerciseDemo {
        canonical_name: "Inchworm",
        video_url: "https://www.youtube.com/watch?v=pv_8CdDPAAk&ab_channel=BreakingMuscle",
        description: "Inchworm exercise demonstration",
        simple_description: "Stand tall, bend over and walk your hands forward into a plank position, then walk your feet toward your hands. Great full-body warm-up exercise!",
        variants: &["inchworm", "inchworms"],
    },
    ExerciseDemo {
        canonical_name: "Bird Dog",
        video_url: "https://www.youtube.com/watch?v=wiFNA3sqjCA",
        description: "Bird dog core exercise",
        simple_description: "Start on hands and knees. Extend opposite arm and leg (like right arm, left leg) and hold. Keep your core tight and don't let your hips twist. Great for balance and core!",
        variants: &["bird dog", "bird dogs"],
    },
    // Weights
    ExerciseDemo {
        canonical_name: "Bicep Curl",
        video_url: "https://www.youtube.com/watch?v=ykJmrZ5v0Oo",
        description: "Dumbbell bicep curl technique",
        simple_description: "Hold dumbbells at your sides with palms facing forward. Bend your elbows to curl the weights up toward your shoulders, then slowly lower them back down.",
        variants: &[
            "bicep curl",
            "bicep curls",
            "dumbbell curl",
            "dumbbell curls",
            "dumbbell bicep curl",
            "dumbbell bicep curls",
        ],
    },
    ExerciseDemo {
        canonical_name: "Shoulder Press",
        video_url: "https://www.youtube.com/watch?v=qEwKCR5JCog",
        description: "Dumbbell shoulder press",
        simple_description: SHOULDER_PRESS_DESCRIPTION,
        variants: &["shoulder press", "dumbbell shoulder press", "dumbbell press"],
    },
    ExerciseDemo {
        canonical_name: "Overhead Press",
        video_url: "https://www.youtube.com/watch?v=qEwKCR5JCog",
        description: "Overhead press technique",
        simple_description: SHOULDER_PRESS_DESCRIPTION,
        variants: &["overhead press"],
    },
    ExerciseDemo {
        canonical_name: "Chest Press",
        video_url: "https://www.youtube.com/watch?v=VmB1G1K7v94",
        description: "Dumbbell chest press",
        simple_description: "Lie on a bench or floor holding dumbbells above your chest. Lower them down to chest level with elbows wide, then press back up. Works your chest muscles.",
        variants: &["chest press", "dumbbell chest press"],
    },
    ExerciseDemo {
        canonical_name: "Bench Press",
        video_url: "https://www.youtube.com/watch?v=rT7DgCr-3pg",
        description: "Bench press technique",
        simple_description: "Lie on a bench with barbell above your chest. Lower the bar to your chest, then press it back up. Keep your feet on the floor and core tight.",
        variants: &["bench press"],
    },
    ExerciseDemo {
        canonical_name: "Row",
        video_url: "https://www.youtube.com/watch?v=roCP6wCXPqo",
        description: "Dumbbell row exercise",
        simple_description: "Bend over holding dumbbells with arms hanging down. Pull the weights up to your ribs by squeezing your shoulder blades together, then lower slowly.",
        variants: &["row", "rows", "dumbbell row", "dumbbell rows"],
    },
    ExerciseDemo {
        canonical_name: "Deadlift",
        video_url: "https://www.youtube.com/watch?v=op9kVnSso6Q",
        description: "Deadlift proper form",
        simple_description: "Stand with feet hip-width apart, bend at hips and knees to grab the weight. Keep your back straight and lift by standing up tall, then lower with control.",
        variants: &["deadlift", "deadlifts"],
    },
    ExerciseDemo {
        canonical_name: "Resistance Band Exercise",
        video_url: "https://www.youtube.com/shorts/FHKKZb1N5WE",
        description: "Resistance band workout",
        simple_description: "Use stretchy resistance bands to add difficulty to exercises. The bands provide constant tension and can target all muscle groups with various movements.",
        variants: &["resistance band", "resistance bands"],
    },
    ExerciseDemo {
        canonical_name: "Band Pull",
        video_url: "https://www.youtube.com/shorts/SuvO4TBwSu4",
        description: "Resistance band pull exercise",
        simple_description: "Hold ends of resistance band and pull apart by squeezing your shoulder blades together. Great for posture and back strength.",
        variants: &["band pull", "band pull apart", "band pull-apart"],
    },
    ExerciseDemo {
        canonical_name: "Kettlebell Swing",
        video_url: "https://www.youtube.com/watch?v=YSxHifyI6s8",
        description: "Kettlebell swing technique",
        simple_description: "Hold kettlebell with both hands, hinge at hips and swing it up to chest height using your hips and glutes. Let it swing back down between your legs.",
        variants: &["kettlebell swing", "kettlebell swings", "kb swing", "kb swings"],
    },
    // Yoga and stretching
    ExerciseDemo {
        canonical_name: "Downward Dog",
        video_url: "https://www.youtube.com/watch?v=ayQoxw8sRTk&ab_channel=Medibank",
        description: "Downward facing dog pose",
        simple_description: "Start on hands and knees, tuck toes and lift hips up to form an upside-down V shape. Keep arms and legs straight. Great stretch for hamstrings and calves.",
        variants: &["downward dog", "downward facing dog"],
    },
    ExerciseDemo {
        canonical_name: "Child's Pose",
        video_url: "https://www.youtube.com/watch?v=kH12QrSGedM&ab_channel=BaptistHealth",
        description: "Child's pose is a restorative yoga position. Kneel on the floor, sit back on your heels, and fold forward with arms extended or by your sides.",
        simple_description: "Kneel and fold forward for relaxation",
        variants: &["child's pose", "childs pose", "child pose"],
    },
    ExerciseDemo {
        canonical_name: "Cobra Stretch",
        video_url: "https://www.youtube.com/watch?v=JDcdhTuycOI",
        description: "Cobra pose stretch",
        simple_description: "Lie face down, place palms under shoulders and gently push up, lifting your chest while keeping hips on ground. Good stretch for your back and abs.",
        variants: &["cobra stretch", "cobra pose"],
    },
    ExerciseDemo {
        canonical_name: "Sun Salutation A",
        video_url: "https://www.youtube.com/watch?v=VT609I8OlCs&ab_channel=KerstinYoga",
        description: "Sun Salutation A is a flowing yoga sequence that warms up the entire body. It includes mountain pose, upward salute, forward fold, halfway lift, low push-up, upward facing dog, and downward facing dog.",
        simple_description: "Flowing yoga sequence from standing to downward dog",
        variants: &["sun salutation a", "sun salutation"],
    },
    ExerciseDemo {
        canonical_name: "Warrior II Pose",
        video_url: "https://www.youtube.com/watch?v=DoC5mh9GxF4",
        description: "Warrior II is a standing yoga pose that strengthens the legs and opens the hips. Step one foot back, bend the front knee, and extend arms parallel to the ground.",
        simple_description: "Standing pose with bent front knee and arms extended",
        variants: &["warrior ii pose", "warrior ii", "warrior 2"],
    },
    ExerciseDemo {
        canonical_name: "Tree Pose",
        video_url: "https://www.youtube.com/watch?v=Fr5kiIygm0c&ab_channel=AloMoves",
        description: "Tree pose improves balance and strengthens the standing leg. Stand on one foot and place the other foot on the inner thigh or calf of the standing leg.",
        simple_description: "Balance on one foot with other foot on inner leg",
        variants: &["tree pose"],
    },
    // Mindfulness
    ExerciseDemo {
        canonical_name: "Deep Breathing",
        video_url: "https://www.youtube.com/watch?v=gz4G31LGyog&ab_channel=TheHonestGuys-Meditations-Relaxation",
        description: "Deep breathing exercises help reduce stress and improve focus. Practice the 4-7-8 technique: inhale for 4 counts, hold for 7, exhale for 8.",
        simple_description: "Controlled breathing pattern: 4-7-8 count",
        variants: &["deep breathing"],
    },
    ExerciseDemo {
        canonical_name: "Body Scan Meditation",
        video_url: "https://www.youtube.com/watch?v=2FnFXq6Z13Q",
        description: "Body scan meditation involves systematically focusing attention on different parts of the body to promote relaxation and mindfulness.",
        simple_description: "Progressive relaxation focusing on each body part",
        variants: &["body scan meditation", "body scan"],
    },
    ExerciseDemo {
        canonical_name: "Gratitude Practice",
        video_url: "https://www.youtube.com/watch?v=xfD4HaBBc0I",
        description: "Gratitude practice involves reflecting on things you're thankful for to improve mental well-being and positive thinking.",
        simple_description: "Mindful reflection on things you're grateful for",
        variants: &["gratitude practice"],
    },
    // Running
    ExerciseDemo {
        canonical_name: "Dynamic Warm-up",
        video_url: "https://www.youtube.com/watch?v=LKSC_KujZ4g&ab_channel=KaleighCohenStrength",
        description: "Dynamic warm-up prepares your body for exercise with movement-based stretches including leg swings, high knees, and butt kicks.",
        simple_description: "Active movements to prepare body for exercise",
        variants: &["dynamic warm-up", "dynamic warmup", "dynamic warm up"],
    },
    ExerciseDemo {
        canonical_name: "Trail Running Intervals",
        video_url: "https://www.youtube.com/watch?v=qOYndQjEDfs&ab_channel=adidas",
        description: "Trail running intervals involve alternating between high and low intensity running periods to improve cardiovascular fitness and endurance.",
        simple_description: "Alternating hard and easy running periods",
        variants: &["trail running intervals"],
    },
    ExerciseDemo {
        canonical_name: "Hill Sprints",
        video_url: "https://www.youtube.com/watch?v=6OwwCVSeN8o&ab_channel=BenParkes",
        description: "Hill sprints are short, intense uphill runs that build power, speed, and strength. Run uphill at near maximum effort for short periods.",
        simple_description: "Short intense uphill runs for power development",
        variants: &["hill sprints", "hill sprint"],
    },
    ExerciseDemo {
        canonical_name: "Cool Down Walk",
        video_url: "https://www.youtube.com/watch?v=Qy3U09CnELI&ab_channel=OliverSjostrom",
        description: "Cool down walking gradually reduces heart rate and helps prevent muscle stiffness after intense exercise.",
        simple_description: "Gradual walking to reduce heart rate after exercise",
        variants: &["cool down walk", "cool-down walk"],
    },
    // Basketball
    ExerciseDemo {
        canonical_name: "Dribbling Drills",
        video_url: "https://www.youtube.com/shorts/SOvS-9CrUyA",
        description: "Basketball dribbling drills improve ball handling skills. Practice controlling the ball with both hands at various speeds and directions.",
        simple_description: "Practice controlling basketball with both hands",
        variants: &["dribbling drills"],
    },
    ExerciseDemo {
        canonical_name: "Defensive Slides",
        video_url: "https://www.youtube.com/watch?v=HHFzW6lhjmM&ab_channel=BeijingFalconsBasketball",
        description: "Defensive slides improve lateral movement and defensive positioning in basketball. Stay low and move quickly side to side.",
        simple_description: "Quick lateral movements in low defensive stance",
        variants: &["defensive slides"],
    },
    ExerciseDemo {
        canonical_name: "Jump Shots",
        video_url: "https://www.youtube.com/watch?v=Ph6-w-LCpYo&ab_channel=ILoveBasketballTV",
        description: "Jump shots are the fundamental shooting technique in basketball. Focus on proper form, follow-through, and consistent release.",
        simple_description: "Basketball shooting technique with proper form",
        variants: &["jump shots", "jump shot"],
    },
    ExerciseDemo {
        canonical_name: "Suicide Runs",
        video_url: "https://www.youtube.com/watch?v=MPL487ToJt8&ab_channel=LIVESTRONG",
        description: "Suicide runs are basketball conditioning drills involving sprinting to different court lines and back to improve speed and agility.",
        simple_description: "Sprint to court lines and back for conditioning",
        variants: &["suicide runs"],
    },
    // Rehabilitation and desk breaks
    ExerciseDemo {
        canonical_name: "Cat-Cow Stretch",
        video_url: "https://www.youtube.com/watch?v=K9bK0BwKFjs&ab_channel=AskDoctorJo",
        description: "Cat-cow stretch improves spinal mobility and relieves back tension. Alternate between arching and rounding your back while on hands and knees.",
        simple_description: "Spinal mobility exercise arching and rounding back",
        variants: &["cat-cow stretch", "cat-cow", "cat cow"],
    },
    ExerciseDemo {
        canonical_name: "Pelvic Tilts",
        video_url: "https://www.youtube.com/watch?v=ZIQjHtghzqw&ab_channel=BaptistHealth",
        description: "Pelvic tilts strengthen the core and improve lower back mobility. Gently tilt your pelvis while lying on your back or standing.",
        simple_description: "Gentle core exercise tilting pelvis back and forth",
        variants: &["pelvic tilts", "pelvic tilt"],
    },
    ExerciseDemo {
        canonical_name: "Knee-to-Chest Stretch",
        video_url: "https://www.youtube.com/watch?v=yVy4L0CGbyQ&ab_channel=CornerstonePhysiotherapy",
        description: "Knee-to-chest stretch relieves lower back tension by gently stretching the lower back and hip flexor muscles.",
        simple_description: "Gentle stretch pulling knee toward chest",
        variants: &["knee-to-chest stretch"],
    },
    ExerciseDemo {
        canonical_name: "Neck Rolls",
        video_url: "https://www.youtube.com/watch?v=X-CUlo4zf0Y&ab_channel=MadePossiblePersonalTraining",
        description: "Neck rolls relieve tension from prolonged sitting. Slowly roll your head in circles to stretch neck muscles.",
        simple_description: "Slow circular head movements to stretch neck",
        variants: &["neck rolls"],
    },
    ExerciseDemo {
        canonical_name: "Shoulder Shrugs",
        video_url: "https://www.youtube.com/watch?v=ja_P3YhmAlE&ab_channel=AskDoctorJo",
        description: "Shoulder shrugs relieve tension in the shoulder and neck area. Lift shoulders toward ears, hold briefly, then release.",
        simple_description: "Lift shoulders up and down to relieve tension",
        variants: &["shoulder shrugs", "shrugs"],
    },
    ExerciseDemo {
        canonical_name: "Seated Spinal Twist",
        video_url: "https://www.youtube.com/watch?v=qEVNj4tcr0Y&ab_channel=Health",
        description: "Seated spinal twist improves spinal mobility and relieves back tension from sitting. Rotate your torso while keeping feet planted.",
        simple_description: "Twist spine while seated to improve mobility",
        variants: &["seated spinal twist"],
    },
    ExerciseDemo {
        canonical_name: "Ankle Circles",
        video_url: "https://www.youtube.com/shorts/Pby8XRtSjpk",
        description: "Ankle circles improve circulation and prevent stiffness from prolonged sitting. Rotate ankles in both directions.",
        simple_description: "Circular ankle movements to improve circulation",
        variants: &["ankle circles"],
    },
];
