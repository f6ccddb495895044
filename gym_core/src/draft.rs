//! Editable copy of one day's workout.
//!
//! Edits happen in memory; `save` writes the whole day back through the
//! schedule store.

use crate::catalog::{get_default_catalog, ExerciseCatalog};
use crate::generate::generate_exercises_from;
use crate::schedule::ScheduleStore;
use crate::storage::KeyValueStore;
use crate::{
    DayOfWeek, DayWorkout, Error, ExerciseConfig, MuscleGroup, Result, WeeklySchedule,
};

/// Minutes budgeted per exercise when estimating a workout
pub const DEFAULT_MINUTES_PER_EXERCISE: u32 = 8;

#[derive(Clone, Debug)]
pub struct DayDraft {
    day: DayOfWeek,
    muscle_groups: Vec<MuscleGroup>,
    exercises: Vec<ExerciseConfig>,
    is_rest_day: bool,
    catalog: &'static ExerciseCatalog,
}

impl DayDraft {
    pub fn from_workout(workout: &DayWorkout) -> Self {
        Self::with_catalog(workout, get_default_catalog())
    }

    pub fn with_catalog(workout: &DayWorkout, catalog: &'static ExerciseCatalog) -> Self {
        Self {
            day: workout.day,
            muscle_groups: workout.muscle_groups.clone(),
            exercises: workout.exercises.clone(),
            is_rest_day: workout.is_rest_day,
            catalog,
        }
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn muscle_groups(&self) -> &[MuscleGroup] {
        &self.muscle_groups
    }

    pub fn exercises(&self) -> &[ExerciseConfig] {
        &self.exercises
    }

    pub fn is_rest_day(&self) -> bool {
        self.is_rest_day
    }

    /// Select or deselect a muscle group and regenerate the exercise list
    ///
    /// Ignored on a rest day. Regeneration discards manual edits.
    pub fn toggle_muscle_group(&mut self, group: MuscleGroup) {
        if self.is_rest_day {
            return;
        }

        if let Some(pos) = self.muscle_groups.iter().position(|g| *g == group) {
            self.muscle_groups.remove(pos);
        } else {
            self.muscle_groups.push(group);
        }
        self.exercises = generate_exercises_from(self.catalog, &self.muscle_groups);
    }

    /// Turning a rest day on clears the selection
    pub fn toggle_rest_day(&mut self) {
        self.is_rest_day = !self.is_rest_day;
        if self.is_rest_day {
            self.muscle_groups.clear();
            self.exercises.clear();
        }
    }

    /// Append a catalog exercise with its default volume
    pub fn add_exercise(&mut self, exercise_id: &str) -> Result<()> {
        let exercise = self
            .catalog
            .get(exercise_id)
            .ok_or_else(|| Error::UnknownExercise(exercise_id.to_string()))?;

        if self.exercises.iter().any(|e| e.exercise_id == exercise_id) {
            return Err(Error::DuplicateExercise(exercise_id.to_string()));
        }

        self.exercises.push(ExerciseConfig::from_exercise(exercise));
        Ok(())
    }

    pub fn remove_exercise(&mut self, index: usize) -> Result<ExerciseConfig> {
        self.check_index(index)?;
        Ok(self.exercises.remove(index))
    }

    /// No-op for the first exercise
    pub fn move_up(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index > 0 {
            self.exercises.swap(index, index - 1);
        }
        Ok(())
    }

    /// No-op for the last exercise
    pub fn move_down(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index + 1 < self.exercises.len() {
            self.exercises.swap(index, index + 1);
        }
        Ok(())
    }

    pub fn set_sets(&mut self, index: usize, sets: u32) -> Result<()> {
        if sets == 0 {
            return Err(Error::InvalidInput("sets must be at least 1".into()));
        }
        self.check_index(index)?;
        self.exercises[index].sets = sets;
        Ok(())
    }

    pub fn set_reps(&mut self, index: usize, reps: impl Into<String>) -> Result<()> {
        let reps = reps.into();
        if reps.trim().is_empty() {
            return Err(Error::InvalidInput("reps must not be empty".into()));
        }
        self.check_index(index)?;
        self.exercises[index].reps = reps;
        Ok(())
    }

    pub fn set_weight(&mut self, index: usize, weight: Option<f64>) -> Result<()> {
        if let Some(w) = weight {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidInput(format!("invalid weight {}", w)));
            }
        }
        self.check_index(index)?;
        self.exercises[index].weight = weight;
        Ok(())
    }

    pub fn estimated_minutes(&self, minutes_per_exercise: u32) -> u32 {
        self.exercises.len() as u32 * minutes_per_exercise
    }

    pub fn to_workout(&self) -> DayWorkout {
        if self.is_rest_day {
            DayWorkout::rest(self.day)
        } else {
            DayWorkout::training(self.day, self.muscle_groups.clone(), self.exercises.clone())
        }
    }

    /// Replace the stored entry for this day with the draft
    pub fn save<S: KeyValueStore + ?Sized>(
        &self,
        store: &ScheduleStore<'_, S>,
    ) -> Result<WeeklySchedule> {
        store.update_day(
            self.day,
            self.muscle_groups.clone(),
            Some(self.exercises.clone()),
            self.is_rest_day,
        )
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.exercises.len() {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "exercise index {} out of range (workout has {})",
                index,
                self.exercises.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ids(draft: &DayDraft) -> Vec<&str> {
        draft.exercises().iter().map(|e| e.exercise_id.as_str()).collect()
    }

    fn empty_monday() -> DayDraft {
        DayDraft::from_workout(&DayWorkout::training(DayOfWeek::Monday, vec![], vec![]))
    }

    #[test]
    fn test_toggle_muscle_group_regenerates() {
        let mut draft = empty_monday();
        draft.toggle_muscle_group(MuscleGroup::Shoulders);
        assert_eq!(draft.exercises().len(), 5);

        draft.toggle_muscle_group(MuscleGroup::Core);
        assert_eq!(
            draft.muscle_groups(),
            &[MuscleGroup::Shoulders, MuscleGroup::Core]
        );
        assert_eq!(
            ids(&draft),
            vec![
                "bench_press",
                "incline_db_press",
                "face_pulls",
                "push_ups",
                "deadlift",
                "squat",
            ]
        );

        draft.toggle_muscle_group(MuscleGroup::Shoulders);
        assert_eq!(draft.muscle_groups(), &[MuscleGroup::Core]);
        assert_eq!(draft.exercises().len(), 5);
    }

    #[test]
    fn test_rest_day_blocks_group_selection() {
        let mut draft = empty_monday();
        draft.toggle_muscle_group(MuscleGroup::Legs);
        draft.toggle_rest_day();
        assert!(draft.muscle_groups().is_empty());
        assert!(draft.exercises().is_empty());

        draft.toggle_muscle_group(MuscleGroup::Arms);
        assert!(draft.muscle_groups().is_empty());
    }

    #[test]
    fn test_add_exercise() {
        let mut draft = empty_monday();
        draft.add_exercise("planks").unwrap();
        assert_eq!(draft.exercises()[0].reps, "45-60 sec");

        assert!(matches!(
            draft.add_exercise("planks"),
            Err(Error::DuplicateExercise(_))
        ));
        assert!(matches!(
            draft.add_exercise("moon_walk"),
            Err(Error::UnknownExercise(_))
        ));
    }

    #[test]
    fn test_move_and_remove() {
        let mut draft = empty_monday();
        for id in ["squat", "lunges", "leg_curl"] {
            draft.add_exercise(id).unwrap();
        }

        draft.move_up(0).unwrap();
        draft.move_down(2).unwrap();
        assert_eq!(ids(&draft), vec!["squat", "lunges", "leg_curl"]);

        draft.move_down(0).unwrap();
        assert_eq!(ids(&draft), vec!["lunges", "squat", "leg_curl"]);
        draft.move_up(2).unwrap();
        assert_eq!(ids(&draft), vec!["lunges", "leg_curl", "squat"]);

        let removed = draft.remove_exercise(1).unwrap();
        assert_eq!(removed.exercise_id, "leg_curl");
        assert!(draft.remove_exercise(5).is_err());
    }

    #[test]
    fn test_edit_volume() {
        let mut draft = empty_monday();
        draft.add_exercise("bench_press").unwrap();

        draft.set_sets(0, 5).unwrap();
        draft.set_reps(0, "5").unwrap();
        draft.set_weight(0, Some(80.0)).unwrap();
        let config = &draft.exercises()[0];
        assert_eq!((config.sets, config.reps.as_str(), config.weight), (5, "5", Some(80.0)));

        assert!(draft.set_sets(0, 0).is_err());
        assert!(draft.set_reps(0, "  ").is_err());
        assert!(draft.set_weight(0, Some(-1.0)).is_err());
    }

    #[test]
    fn test_estimated_minutes() {
        let mut draft = empty_monday();
        draft.toggle_muscle_group(MuscleGroup::Arms);
        assert_eq!(draft.estimated_minutes(DEFAULT_MINUTES_PER_EXERCISE), 40);
    }

    #[test]
    fn test_save_writes_whole_day() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);
        store
            .update_day(DayOfWeek::Monday, vec![MuscleGroup::Back], None, false)
            .unwrap();

        let mut draft = DayDraft::from_workout(store.load().day(DayOfWeek::Monday));
        draft.remove_exercise(0).unwrap();
        draft.add_exercise("planks").unwrap();
        draft.save(&store).unwrap();

        let monday = store.load().day(DayOfWeek::Monday).clone();
        assert_eq!(monday, draft.to_workout());
        assert_eq!(monday.exercises.last().unwrap().exercise_id, "planks");
        assert_eq!(monday.exercises.len(), 5);
    }
}
