//! Default exercise selection for chosen muscle groups.

use crate::catalog::{get_default_catalog, ExerciseCatalog};
use crate::types::{ExerciseConfig, MuscleGroup};
use std::collections::HashSet;

/// Per-group cap when a single muscle group is selected
pub const SINGLE_GROUP_LIMIT: usize = 5;
/// Per-group cap when several muscle groups are selected
pub const MULTI_GROUP_LIMIT: usize = 3;

/// Generate a day's exercises from the built-in catalog
pub fn generate_exercises(groups: &[MuscleGroup]) -> Vec<ExerciseConfig> {
    generate_exercises_from(get_default_catalog(), groups)
}

/// Generate a day's exercises for `groups` from `catalog`
///
/// For each group, in selection order, the first `limit` catalog exercises
/// tagged with it are considered. An exercise already picked for an earlier
/// group is skipped but still uses up one of the later group's slots.
pub fn generate_exercises_from(
    catalog: &ExerciseCatalog,
    groups: &[MuscleGroup],
) -> Vec<ExerciseConfig> {
    let mut selected = Vec::with_capacity(groups.len());
    for &group in groups {
        if !selected.contains(&group) {
            selected.push(group);
        }
    }

    let limit = if selected.len() == 1 {
        SINGLE_GROUP_LIMIT
    } else {
        MULTI_GROUP_LIMIT
    };

    let mut exercises = Vec::new();
    let mut added = HashSet::new();

    for group in selected {
        for exercise in catalog.by_muscle_group(group).take(limit) {
            if added.insert(exercise.id.as_str()) {
                exercises.push(ExerciseConfig::from_exercise(exercise));
            }
        }
    }

    tracing::debug!(
        "Generated {} exercises for {:?}",
        exercises.len(),
        groups
    );
    exercises
}
