//! Predefined multi-day programs.
//!
//! Programs are browse-only reference data. They point at catalog exercises
//! by id and are never copied into the user's schedule.

use crate::catalog::ExerciseCatalog;
use crate::types::*;
use once_cell::sync::Lazy;

static DEFAULT_PROGRAMS: Lazy<Vec<Program>> = Lazy::new(build_default_programs);

/// Get a reference to the cached built-in programs
pub fn get_default_programs() -> &'static [Program] {
    &DEFAULT_PROGRAMS
}

/// Look up a built-in program by id
pub fn get(id: &str) -> Option<&'static Program> {
    get_default_programs().iter().find(|p| p.id == id)
}

impl RoutineDay {
    /// Catalog exercises for this day, skipping ids the catalog no longer has
    pub fn resolve<'c>(&self, catalog: &'c ExerciseCatalog) -> Vec<&'c Exercise> {
        self.exercise_ids
            .iter()
            .filter_map(|id| {
                let found = catalog.get(id);
                if found.is_none() {
                    tracing::debug!("Routine {} references unknown exercise {}", self.id, id);
                }
                found
            })
            .collect()
    }
}

/// Report program references that do not resolve in `catalog`
pub fn validate(programs: &[Program], catalog: &ExerciseCatalog) -> Vec<String> {
    let mut errors = Vec::new();
    for program in programs {
        if program.days.is_empty() {
            errors.push(format!("Program {} has no days", program.id));
        }
        for day in &program.days {
            for id in &day.exercise_ids {
                if catalog.get(id).is_none() {
                    errors.push(format!(
                        "Program {} day {} references unknown exercise {}",
                        program.id, day.id, id
                    ));
                }
            }
        }
    }
    errors
}

fn routine_day(id: &str, title: &str, exercise_ids: &[&str]) -> RoutineDay {
    RoutineDay {
        id: id.into(),
        title: title.into(),
        exercise_ids: exercise_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_default_programs() -> Vec<Program> {
    vec![
        Program {
            id: "ppl_beginner".into(),
            title: "Push Pull Legs (Beginner)".into(),
            description: "A classic 3-day split to build mass and strength.".into(),
            level: Level::Beginner,
            days: vec![
                routine_day(
                    "push_1",
                    "Push Day (Chest/Shoulders/Tri)",
                    &[
                        "bench_press",
                        "incline_db_press",
                        "overhead_press",
                        "lateral_raises",
                        "tricep_pushdown",
                    ],
                ),
                routine_day(
                    "pull_1",
                    "Pull Day (Back/Bi)",
                    &[
                        "pull_ups",
                        "barbell_rows",
                        "lat_pulldown",
                        "face_pulls",
                        "bicep_curls",
                    ],
                ),
                routine_day(
                    "legs_1",
                    "Leg Day (Quads/Hams)",
                    &[
                        "squat",
                        "leg_press",
                        "romanian_deadlift",
                        "leg_curl",
                        "calf_raises",
                    ],
                ),
            ],
        },
        Program {
            id: "full_body".into(),
            title: "Full Body Blaster".into(),
            description: "Hit everything in one intense session.".into(),
            level: Level::Intermediate,
            days: vec![
                routine_day(
                    "full_1",
                    "Full Body A",
                    &[
                        "squat",
                        "bench_press",
                        "barbell_rows",
                        "overhead_press",
                        "planks",
                    ],
                ),
                routine_day(
                    "full_2",
                    "Full Body B",
                    &[
                        "deadlift",
                        "incline_db_press",
                        "pull_ups",
                        "lunges",
                        "russian_twists",
                    ],
                ),
            ],
        },
    ]
}
