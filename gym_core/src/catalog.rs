//! Built-in exercise library.
//!
//! The catalog is fixed at build time. Definition order matters: exercise
//! auto-generation walks it front to back.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

/// Look up a built-in exercise by id
pub fn get(id: &str) -> Option<&'static Exercise> {
    get_default_catalog().get(id)
}

/// Exercises in definition order, indexed by id
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    index: HashMap<String, usize>,
}

impl ExerciseCatalog {
    /// Build a catalog from exercises in the order given
    ///
    /// A later duplicate id does not replace the earlier entry in the index;
    /// `validate` reports it.
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let mut index = HashMap::with_capacity(exercises.len());
        for (i, exercise) in exercises.iter().enumerate() {
            index.entry(exercise.id.clone()).or_insert(i);
        }
        Self { exercises, index }
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.index.get(id).map(|&i| &self.exercises[i])
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises tagged with `group`, in definition order
    pub fn by_muscle_group(&self, group: MuscleGroup) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |e| e.targets(group))
    }

    /// Check the catalog's structural invariants
    ///
    /// Returns a list of human-readable problems; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for exercise in &self.exercises {
            if !seen.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise id: {}", exercise.id));
            }
            if exercise.muscle_groups.is_empty() {
                errors.push(format!("Exercise {} has no muscle groups", exercise.id));
            }
            if exercise.default_sets == 0 {
                errors.push(format!("Exercise {} has zero default sets", exercise.id));
            }
            if exercise.default_reps.trim().is_empty() {
                errors.push(format!("Exercise {} has empty default reps", exercise.id));
            }
        }

        for group in MuscleGroup::ALL {
            if self.by_muscle_group(group).next().is_none() {
                errors.push(format!("Catalog has no {} exercises", group));
            }
        }

        errors
    }
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    muscle_groups: &[MuscleGroup],
    description: &str,
    steps: &[&str],
    tips: &[&str],
    default_sets: u32,
    default_reps: &str,
    demo_url: &str,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        muscle_groups: muscle_groups.to_vec(),
        description: description.into(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        tips: tips.iter().map(|s| s.to_string()).collect(),
        default_sets,
        default_reps: default_reps.into(),
        demo_url: Some(demo_url.into()),
    }
}

/// Builds the default catalog
///
/// **Note**: prefer `get_default_catalog()`, which returns a cached reference.
pub fn build_default_catalog() -> ExerciseCatalog {
    ExerciseCatalog::new(vec![
        // Chest
        exercise(
            "bench_press",
            "Barbell Bench Press",
            &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
            "The king of upper body exercises. Targets the pectorals, deltoids, and triceps.",
            &[
                "Lie back on a flat bench. Using a medium width grip, lift the bar from the rack and hold it straight over you with your arms locked.",
                "From the starting position, breathe in and begin coming down slowly until the bar touches your middle chest.",
                "After a brief pause, push the bar back to the starting position as you breathe out.",
                "Lock your arms and squeeze your chest in the contracted position at the top.",
            ],
            &[
                "Keep your feet flat on the ground.",
                "Do not bounce the bar off your chest.",
                "Keep your elbows at a 45-degree angle.",
            ],
            4,
            "8-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-bench-press-front.mp4",
        ),
        exercise(
            "incline_db_press",
            "Incline Dumbbell Press",
            &[MuscleGroup::Chest, MuscleGroup::Shoulders],
            "Targets the upper chest and shoulders for a complete chest development.",
            &[
                "Lie back on an incline bench with a dumbbell in each hand atop your thighs.",
                "Lift the weights to your shoulders, then push them up until your arms are locked out.",
                "Lower the weights slowly to your sides, keeping elbows slightly tucked.",
                "Press back up to the starting position.",
            ],
            &[
                "Focus on the stretch at the bottom.",
                "Don't bang the dumbbells together at the top.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-incline-bench-press-front.mp4",
        ),
        exercise(
            "cable_flies",
            "Cable Flies",
            &[MuscleGroup::Chest],
            "Isolation exercise for chest with constant tension throughout the movement.",
            &[
                "Set pulleys at chest height and grab handles.",
                "Step forward with one foot, keeping a slight bend in elbows.",
                "Bring handles together in front of chest in a hugging motion.",
                "Slowly return to starting position with control.",
            ],
            &[
                "Keep slight bend in elbows.",
                "Focus on squeezing chest at peak contraction.",
            ],
            3,
            "12-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-cable-standing-fly-front.mp4",
        ),
        exercise(
            "dips",
            "Chest Dips",
            &[MuscleGroup::Chest, MuscleGroup::Arms],
            "Compound bodyweight exercise targeting lower chest and triceps.",
            &[
                "Grab parallel bars and lift yourself up.",
                "Lean forward slightly to emphasize chest.",
                "Lower your body until upper arms are parallel to ground.",
                "Push back up to starting position.",
            ],
            &[
                "Lean forward for more chest activation.",
                "Don't lock out elbows at top.",
            ],
            3,
            "8-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-chest-dip-front.mp4",
        ),
        exercise(
            "push_ups",
            "Push-Ups",
            &[MuscleGroup::Chest, MuscleGroup::Arms, MuscleGroup::Core],
            "Classic bodyweight exercise for chest, shoulders, and triceps.",
            &[
                "Get into plank position with hands slightly wider than shoulder-width.",
                "Lower your body until chest nearly touches the floor.",
                "Push back up to starting position.",
                "Keep core tight throughout the movement.",
            ],
            &[
                "Keep body in straight line.",
                "Don't let hips sag or pike up.",
            ],
            3,
            "15-20",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-Bodyweight-push-up-front.mp4",
        ),

        // Back
        exercise(
            "pull_ups",
            "Pull-Ups",
            &[MuscleGroup::Back, MuscleGroup::Arms],
            "A classic bodyweight exercise for back width and bicep development.",
            &[
                "Grab the pull-up bar with palms facing forward, grip wider than shoulder width.",
                "Pull your torso up until your chin is over the bar.",
                "Lower yourself until your arms are fully extended.",
            ],
            &[
                "Avoid swinging.",
                "Focus on pulling with your elbows.",
            ],
            3,
            "AMRAP",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-pull-up-front.mp4",
        ),
        exercise(
            "deadlift",
            "Conventional Deadlift",
            &[MuscleGroup::Back, MuscleGroup::Legs, MuscleGroup::Core],
            "The ultimate full body power movement for strength and mass.",
            &[
                "Stand with feet hip-width apart, barbell over mid-foot.",
                "Hinge at hips to grab the bar just outside your legs.",
                "Bend knees until shins touch bar. Chest up, back straight.",
                "Pull the weight by driving hips forward and standing up tall.",
            ],
            &[
                "Keep back neutral.",
                "Bar should travel close to legs.",
            ],
            4,
            "5",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-deadlift-front.mp4",
        ),
        exercise(
            "barbell_rows",
            "Barbell Bent-Over Rows",
            &[MuscleGroup::Back, MuscleGroup::Arms],
            "Compound movement for back thickness and bicep development.",
            &[
                "Hold barbell with overhand grip, bend at hips until torso is nearly parallel to floor.",
                "Pull the bar to your lower chest/upper abs.",
                "Squeeze shoulder blades together at the top.",
                "Lower bar with control back to starting position.",
            ],
            &[
                "Keep lower back flat.",
                "Pull with elbows, not hands.",
            ],
            4,
            "8-10",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-bent-over-row-front.mp4",
        ),
        exercise(
            "lat_pulldown",
            "Lat Pulldown",
            &[MuscleGroup::Back, MuscleGroup::Arms],
            "Machine exercise targeting the latissimus dorsi for back width.",
            &[
                "Sit at lat pulldown station and grab bar with wide overhand grip.",
                "Pull bar down to upper chest while squeezing lats.",
                "Slowly return bar to starting position with control.",
            ],
            &[
                "Don't lean back excessively.",
                "Focus on using lats, not arms.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-cable-lat-pulldown-front.mp4",
        ),
        exercise(
            "seated_cable_row",
            "Seated Cable Row",
            &[MuscleGroup::Back],
            "Excellent for building back thickness and improving posture.",
            &[
                "Sit at cable row station with feet on platform, knees slightly bent.",
                "Grab handles and pull towards your torso, squeezing shoulder blades.",
                "Extend arms slowly back to starting position.",
            ],
            &[
                "Keep torso stationary.",
                "Squeeze at peak contraction.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-cable-seated-row-front.mp4",
        ),
        exercise(
            "face_pulls",
            "Face Pulls",
            &[MuscleGroup::Back, MuscleGroup::Shoulders],
            "Great for rear delts and upper back, improves shoulder health.",
            &[
                "Set cable at head height with rope attachment.",
                "Pull rope towards face, separating hands as you pull.",
                "Squeeze upper back and rear delts at contraction.",
                "Return to starting position with control.",
            ],
            &[
                "Keep elbows high.",
                "External rotate at the end of movement.",
            ],
            3,
            "15-20",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-cable-face-pull-front.mp4",
        ),

        // Legs
        exercise(
            "squat",
            "Barbell Squat",
            &[MuscleGroup::Legs, MuscleGroup::Core],
            "The king of leg exercises. Builds overall leg strength and mass.",
            &[
                "Rest the bar on your upper back (traps).",
                "Step back, feet shoulder-width apart, toes slightly out.",
                "Squat down by pushing your hips back and bending your knees.",
                "Go as deep as flexibility allows, then drive back up.",
            ],
            &[
                "Keep your chest up.",
                "Drive through your heels.",
                "Keep knees pushed out.",
            ],
            4,
            "6-8",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-squat-front.mp4",
        ),
        exercise(
            "leg_press",
            "Leg Press",
            &[MuscleGroup::Legs],
            "Machine exercise for building leg mass with controlled movement.",
            &[
                "Sit on leg press machine with feet shoulder-width apart on platform.",
                "Lower the weight by bending knees towards chest.",
                "Push through feet to extend legs without locking knees.",
            ],
            &[
                "Don't let lower back round.",
                "Don't lock out knees at top.",
            ],
            4,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-machine-leg-press-front.mp4",
        ),
        exercise(
            "lunges",
            "Walking Lunges",
            &[MuscleGroup::Legs, MuscleGroup::Core],
            "Unilateral exercise for leg strength and balance.",
            &[
                "Stand upright holding dumbbells at sides.",
                "Step forward and lower hips until both knees are at 90 degrees.",
                "Push through front heel to step forward into next lunge.",
            ],
            &[
                "Keep torso upright.",
                "Don't let front knee pass toes.",
            ],
            3,
            "12 each leg",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-lunge-front.mp4",
        ),
        exercise(
            "leg_curl",
            "Lying Leg Curl",
            &[MuscleGroup::Legs],
            "Isolation exercise targeting the hamstrings.",
            &[
                "Lie face down on leg curl machine with pad behind ankles.",
                "Curl weight up by bending knees.",
                "Squeeze hamstrings at top, then lower with control.",
            ],
            &[
                "Don't lift hips off pad.",
                "Control the negative.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-machine-lying-leg-curl-side.mp4",
        ),
        exercise(
            "leg_extension",
            "Leg Extension",
            &[MuscleGroup::Legs],
            "Isolation exercise for quadriceps development.",
            &[
                "Sit on leg extension machine with pad on front of ankles.",
                "Extend legs until straight.",
                "Squeeze quads at top, then lower with control.",
            ],
            &[
                "Don't use momentum.",
                "Pause at top contraction.",
            ],
            3,
            "12-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-machine-leg-extension-side.mp4",
        ),
        exercise(
            "calf_raises",
            "Standing Calf Raises",
            &[MuscleGroup::Legs],
            "Isolation exercise for calf muscle development.",
            &[
                "Stand on calf raise machine with shoulders under pads.",
                "Rise up on toes as high as possible.",
                "Lower heels below platform level for full stretch.",
            ],
            &[
                "Full range of motion.",
                "Pause at top and bottom.",
            ],
            4,
            "15-20",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-machine-standing-calf-raise-side.mp4",
        ),
        exercise(
            "romanian_deadlift",
            "Romanian Deadlift",
            &[MuscleGroup::Legs, MuscleGroup::Back],
            "Hip hinge movement targeting hamstrings and glutes.",
            &[
                "Hold barbell with overhand grip at hip level.",
                "Push hips back while lowering bar along legs.",
                "Feel stretch in hamstrings, then drive hips forward to stand.",
            ],
            &[
                "Keep bar close to legs.",
                "Slight bend in knees.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-romanian-deadlift-front.mp4",
        ),

        // Shoulders
        exercise(
            "overhead_press",
            "Overhead Press",
            &[MuscleGroup::Shoulders, MuscleGroup::Arms],
            "Compound pressing movement for shoulder strength and mass.",
            &[
                "Hold barbell at shoulder level with grip just outside shoulders.",
                "Press bar straight overhead until arms are locked.",
                "Lower bar back to shoulders with control.",
            ],
            &[
                "Keep core tight.",
                "Don't lean back excessively.",
            ],
            4,
            "6-8",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-overhead-press-front.mp4",
        ),
        exercise(
            "lateral_raises",
            "Dumbbell Lateral Raises",
            &[MuscleGroup::Shoulders],
            "Isolation exercise for medial deltoid development.",
            &[
                "Stand with dumbbells at sides, slight bend in elbows.",
                "Raise arms out to sides until parallel with floor.",
                "Lower with control back to starting position.",
            ],
            &[
                "Lead with elbows.",
                "Don't swing the weights.",
            ],
            3,
            "12-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-lateral-raise-front.mp4",
        ),
        exercise(
            "front_raises",
            "Dumbbell Front Raises",
            &[MuscleGroup::Shoulders],
            "Isolation exercise targeting the front deltoids.",
            &[
                "Stand with dumbbells in front of thighs.",
                "Raise one or both arms forward to shoulder height.",
                "Lower with control and repeat.",
            ],
            &[
                "Keep slight bend in elbows.",
                "Don't swing or use momentum.",
            ],
            3,
            "12-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-front-raise-front.mp4",
        ),
        exercise(
            "rear_delt_flies",
            "Rear Delt Flies",
            &[MuscleGroup::Shoulders, MuscleGroup::Back],
            "Isolation exercise for rear deltoid development.",
            &[
                "Bend at hips with dumbbells hanging below chest.",
                "Raise arms out to sides, squeezing rear delts.",
                "Lower with control back to starting position.",
            ],
            &[
                "Keep torso stable.",
                "Squeeze shoulder blades together.",
            ],
            3,
            "15-20",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-rear-delt-fly-front.mp4",
        ),
        exercise(
            "arnold_press",
            "Arnold Press",
            &[MuscleGroup::Shoulders, MuscleGroup::Arms],
            "Rotational pressing movement hitting all three deltoid heads.",
            &[
                "Start with dumbbells at shoulder level, palms facing you.",
                "Press up while rotating palms to face forward.",
                "Reverse the motion back to starting position.",
            ],
            &[
                "Control the rotation.",
                "Full range of motion.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-arnold-press-front.mp4",
        ),

        // Arms
        exercise(
            "bicep_curls",
            "Barbell Bicep Curls",
            &[MuscleGroup::Arms],
            "Classic isolation exercise for bicep development.",
            &[
                "Stand with barbell at arm's length, palms forward.",
                "Curl bar up towards shoulders, keeping elbows stationary.",
                "Squeeze biceps at top, then lower with control.",
            ],
            &[
                "Don't swing body.",
                "Keep elbows pinned to sides.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-curl-front.mp4",
        ),
        exercise(
            "hammer_curls",
            "Hammer Curls",
            &[MuscleGroup::Arms],
            "Targets brachialis and forearms along with biceps.",
            &[
                "Hold dumbbells at sides with palms facing each other.",
                "Curl weights up while keeping palms facing inward.",
                "Lower with control back to starting position.",
            ],
            &[
                "Keep elbows stationary.",
                "Don't use momentum.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-hammer-curl-front.mp4",
        ),
        exercise(
            "tricep_pushdown",
            "Cable Tricep Pushdown",
            &[MuscleGroup::Arms],
            "Isolation exercise targeting all three tricep heads.",
            &[
                "Stand at cable machine with rope or bar attachment.",
                "Push weight down by extending elbows.",
                "Squeeze triceps at bottom, then return with control.",
            ],
            &[
                "Keep elbows pinned to sides.",
                "Don't lean forward.",
            ],
            3,
            "12-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-cable-pushdown-front.mp4",
        ),
        exercise(
            "skull_crushers",
            "Skull Crushers",
            &[MuscleGroup::Arms],
            "Lying tricep extension for mass building.",
            &[
                "Lie on bench holding EZ bar or dumbbells above chest.",
                "Lower weight towards forehead by bending elbows.",
                "Extend arms back to starting position.",
            ],
            &[
                "Keep upper arms stationary.",
                "Control the weight.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-skullcrusher-side.mp4",
        ),
        exercise(
            "preacher_curls",
            "Preacher Curls",
            &[MuscleGroup::Arms],
            "Strict bicep isolation eliminating momentum.",
            &[
                "Sit at preacher bench with upper arms on pad.",
                "Curl weight up towards shoulders.",
                "Lower with control, feeling the stretch.",
            ],
            &[
                "Don't go too heavy.",
                "Full range of motion.",
            ],
            3,
            "10-12",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-dumbbell-preacher-curl-front.mp4",
        ),
        exercise(
            "close_grip_bench",
            "Close-Grip Bench Press",
            &[MuscleGroup::Arms, MuscleGroup::Chest],
            "Compound tricep exercise with chest involvement.",
            &[
                "Lie on bench with narrow grip on barbell.",
                "Lower bar to lower chest, keeping elbows tucked.",
                "Press back up, focusing on tricep contraction.",
            ],
            &[
                "Hands about shoulder-width apart.",
                "Keep elbows close to body.",
            ],
            3,
            "8-10",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-barbell-close-grip-bench-press-front.mp4",
        ),

        // Core
        exercise(
            "planks",
            "Plank Hold",
            &[MuscleGroup::Core],
            "Isometric core exercise for overall stability.",
            &[
                "Get into push-up position on forearms.",
                "Keep body in straight line from head to heels.",
                "Hold position while breathing normally.",
            ],
            &[
                "Don't let hips sag or pike.",
                "Squeeze glutes and abs.",
            ],
            3,
            "45-60 sec",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-front-plank-side.mp4",
        ),
        exercise(
            "crunches",
            "Crunches",
            &[MuscleGroup::Core],
            "Classic ab exercise targeting upper rectus abdominis.",
            &[
                "Lie on back with knees bent, hands behind head.",
                "Curl shoulders off ground towards knees.",
                "Lower with control, don't pull on neck.",
            ],
            &[
                "Keep lower back pressed into floor.",
                "Exhale as you crunch up.",
            ],
            3,
            "15-20",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-crunch-side.mp4",
        ),
        exercise(
            "leg_raises",
            "Hanging Leg Raises",
            &[MuscleGroup::Core],
            "Advanced ab exercise targeting lower abs.",
            &[
                "Hang from pull-up bar with arms extended.",
                "Raise legs until parallel with floor or higher.",
                "Lower with control, avoiding swinging.",
            ],
            &[
                "Keep legs straight for more difficulty.",
                "Control the descent.",
            ],
            3,
            "10-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-hanging-leg-raise-front.mp4",
        ),
        exercise(
            "russian_twists",
            "Russian Twists",
            &[MuscleGroup::Core],
            "Rotational core exercise for obliques.",
            &[
                "Sit with knees bent, lean back slightly, feet off ground.",
                "Hold weight or medicine ball, rotate torso side to side.",
                "Touch weight to floor on each side.",
            ],
            &[
                "Keep feet elevated.",
                "Control the rotation.",
            ],
            3,
            "20 total",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-russian-twist-front.mp4",
        ),
        exercise(
            "cable_woodchops",
            "Cable Woodchops",
            &[MuscleGroup::Core],
            "Rotational movement for functional core strength.",
            &[
                "Set cable high, stand sideways to machine.",
                "Pull handle diagonally down and across body.",
                "Control return to starting position.",
            ],
            &[
                "Rotate from hips and core.",
                "Keep arms extended.",
            ],
            3,
            "12 each side",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-cable-woodchop-front.mp4",
        ),
        exercise(
            "dead_bug",
            "Dead Bug",
            &[MuscleGroup::Core],
            "Anti-extension core exercise for stability.",
            &[
                "Lie on back with arms extended to ceiling, legs in tabletop.",
                "Lower opposite arm and leg towards floor.",
                "Return to start and repeat on other side.",
            ],
            &[
                "Keep lower back pressed into floor.",
                "Move slowly and controlled.",
            ],
            3,
            "10 each side",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-dead-bug-front.mp4",
        ),

        // Cardio
        exercise(
            "jump_rope",
            "Jump Rope",
            &[MuscleGroup::Cardio, MuscleGroup::Legs],
            "High-intensity cardio exercise for conditioning.",
            &[
                "Hold rope handles at hip level.",
                "Jump just high enough for rope to pass under feet.",
                "Land softly on balls of feet.",
            ],
            &[
                "Keep elbows close to body.",
                "Start with short intervals.",
            ],
            5,
            "1 min",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-jump-rope-front.mp4",
        ),
        exercise(
            "burpees",
            "Burpees",
            &[MuscleGroup::Cardio, MuscleGroup::Core, MuscleGroup::Chest],
            "Full body conditioning exercise.",
            &[
                "Start standing, drop to squat with hands on floor.",
                "Jump feet back to plank, do a push-up.",
                "Jump feet to hands, then jump up with arms overhead.",
            ],
            &[
                "Maintain good form over speed.",
                "Land softly.",
            ],
            3,
            "10-15",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-burpee-front.mp4",
        ),
        exercise(
            "mountain_climbers",
            "Mountain Climbers",
            &[MuscleGroup::Cardio, MuscleGroup::Core],
            "Dynamic cardio exercise targeting core and conditioning.",
            &[
                "Start in plank position.",
                "Drive one knee towards chest, then quickly switch legs.",
                "Continue alternating in running motion.",
            ],
            &[
                "Keep hips level.",
                "Maintain plank position.",
            ],
            3,
            "30 sec",
            "https://media.musclewiki.com/media/uploads/videos/branded/male-bodyweight-mountain-climber-front.mp4",
        ),
    ])
}
