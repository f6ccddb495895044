//! Weekly schedule persistence.
//!
//! The schedule is one record holding all seven days. There is no per-day
//! write: every change loads the record, replaces one day wholesale, and
//! writes the record back.

use crate::generate::generate_exercises;
use crate::storage::{self, KeyValueStore, LOGS_KEY, PREFERENCES_KEY, SCHEDULE_KEY};
use crate::{DayOfWeek, DayWorkout, ExerciseConfig, MuscleGroup, Result, WeeklySchedule};
use chrono::{DateTime, Utc};

/// Schedule operations over a key-value backend
pub struct ScheduleStore<'a, S: KeyValueStore + ?Sized> {
    backend: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> ScheduleStore<'a, S> {
    pub fn new(backend: &'a S) -> Self {
        Self { backend }
    }

    /// Load the persisted schedule, or the all-rest-day default
    ///
    /// Never fails: unreadable records are logged and treated as absent.
    pub fn load(&self) -> WeeklySchedule {
        storage::read_json(self.backend, SCHEDULE_KEY).unwrap_or_else(|| {
            tracing::debug!("No schedule stored, using all-rest-day default");
            WeeklySchedule::default()
        })
    }

    /// Persist the full 7-day record in a single write
    pub fn save(&self, schedule: &WeeklySchedule) -> Result<()> {
        storage::write_json(self.backend, SCHEDULE_KEY, schedule)?;
        tracing::info!("Saved schedule ({} training days)", schedule.training_days());
        Ok(())
    }

    /// Replace one day's entry and persist the schedule
    ///
    /// A rest day always ends up with no muscle groups and no exercises.
    /// On a training day, omitted exercises are generated from the groups.
    pub fn update_day(
        &self,
        day: DayOfWeek,
        muscle_groups: Vec<MuscleGroup>,
        exercises: Option<Vec<ExerciseConfig>>,
        is_rest_day: bool,
    ) -> Result<WeeklySchedule> {
        let mut schedule = self.load();

        let workout = if is_rest_day {
            DayWorkout::rest(day)
        } else {
            let exercises = exercises.unwrap_or_else(|| generate_exercises(&muscle_groups));
            DayWorkout::training(day, muscle_groups, exercises)
        };
        schedule.set_day(workout);

        self.save(&schedule)?;
        Ok(schedule)
    }

    /// The entry for the weekday of `now`
    pub fn today(&self, now: DateTime<Utc>) -> DayWorkout {
        self.load().day(DayOfWeek::of(now)).clone()
    }

    /// Whether any day has been set up for training
    pub fn has_user_setup(&self) -> bool {
        self.load().iter().any(|d| !d.is_rest_day)
    }

    /// Delete the schedule, the workout logs, and preferences
    pub fn clear_all(&self) -> Result<()> {
        let result = self
            .backend
            .remove_many(&[SCHEDULE_KEY, LOGS_KEY, PREFERENCES_KEY]);
        match result {
            Ok(()) => tracing::info!("Cleared all stored data"),
            Err(ref e) => tracing::error!("Error clearing data: {}", e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_exercises;
    use crate::history::LogStore;
    use crate::storage::{FileStore, MemoryStore};
    use crate::WorkoutLog;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_load_default_when_empty() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);

        assert_eq!(store.load(), WeeklySchedule::default());
        assert!(!store.has_user_setup());
        // Reading does not write a default record
        assert!(!backend.contains(SCHEDULE_KEY));
    }

    #[test]
    fn test_update_day_generates_exercises() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);
        let groups = vec![MuscleGroup::Chest, MuscleGroup::Back];

        store
            .update_day(DayOfWeek::Wednesday, groups.clone(), None, false)
            .unwrap();

        let loaded = store.load();
        let wednesday = loaded.day(DayOfWeek::Wednesday);
        assert!(!wednesday.is_rest_day);
        assert_eq!(wednesday.muscle_groups, groups);
        assert_eq!(wednesday.exercises, generate_exercises(&groups));
        assert!(store.has_user_setup());
    }

    #[test]
    fn test_update_day_rest_discards_input() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);
        let exercises = generate_exercises(&[MuscleGroup::Legs]);

        store
            .update_day(DayOfWeek::Friday, vec![MuscleGroup::Legs], None, false)
            .unwrap();
        store
            .update_day(
                DayOfWeek::Friday,
                vec![MuscleGroup::Legs],
                Some(exercises),
                true,
            )
            .unwrap();

        let friday = store.load().day(DayOfWeek::Friday).clone();
        assert!(friday.is_rest_day);
        assert!(friday.muscle_groups.is_empty());
        assert!(friday.exercises.is_empty());
    }

    #[test]
    fn test_update_day_keeps_explicit_exercises() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);
        let custom = vec![ExerciseConfig {
            exercise_id: "planks".into(),
            sets: 5,
            reps: "90 sec".into(),
            weight: None,
            completed: false,
        }];

        let returned = store
            .update_day(
                DayOfWeek::Monday,
                vec![MuscleGroup::Core],
                Some(custom.clone()),
                false,
            )
            .unwrap();

        assert_eq!(returned.day(DayOfWeek::Monday).exercises, custom);
        assert_eq!(store.load(), returned);
    }

    #[test]
    fn test_update_day_replaces_only_that_day() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);

        store
            .update_day(DayOfWeek::Monday, vec![MuscleGroup::Arms], None, false)
            .unwrap();
        store
            .update_day(DayOfWeek::Tuesday, vec![MuscleGroup::Legs], None, false)
            .unwrap();

        let schedule = store.load();
        assert_eq!(schedule.day(DayOfWeek::Monday).muscle_groups, vec![MuscleGroup::Arms]);
        assert_eq!(schedule.day(DayOfWeek::Tuesday).muscle_groups, vec![MuscleGroup::Legs]);
        assert_eq!(schedule.training_days(), 2);
    }

    #[test]
    fn test_today_follows_weekday() {
        let backend = MemoryStore::new();
        let store = ScheduleStore::new(&backend);
        store
            .update_day(DayOfWeek::Thursday, vec![MuscleGroup::Cardio], None, false)
            .unwrap();

        // 2024-03-14 was a Thursday
        let thursday = Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap();
        assert_eq!(store.today(thursday).day, DayOfWeek::Thursday);
        assert!(!store.today(thursday).is_rest_day);
    }

    #[test]
    fn test_corrupted_schedule_falls_back_to_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = FileStore::new(temp_dir.path());
        std::fs::write(backend.path_for(SCHEDULE_KEY), "{ not json").unwrap();

        let store = ScheduleStore::new(&backend);
        assert_eq!(store.load(), WeeklySchedule::default());
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = FileStore::new(temp_dir.path());
        let store = ScheduleStore::new(&backend);
        let logs = LogStore::new(&backend);

        store
            .update_day(DayOfWeek::Sunday, vec![MuscleGroup::Back], None, false)
            .unwrap();
        logs.append(WorkoutLog {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            day: DayOfWeek::Sunday,
            exercises: vec![],
            duration: Some(1),
            completed: true,
        })
        .unwrap();
        backend.set(PREFERENCES_KEY, "{}").unwrap();

        store.clear_all().unwrap();

        assert_eq!(store.load(), WeeklySchedule::default());
        assert!(logs.load().is_empty());
        assert!(!backend.path_for(PREFERENCES_KEY).exists());
    }
}
