//! Active workout session.
//!
//! A session is created from a scheduled day (`start`), lets the user mark
//! exercises done or undone in any order (`toggle`), and is consumed by
//! `finish`, which produces the log entry. Nothing here is persisted until
//! the resulting log is appended to the log store.

use crate::{DayOfWeek, DayWorkout, Error, ExerciseConfig, MuscleGroup, Result, WorkoutLog};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An in-progress workout
#[derive(Clone, Debug)]
pub struct WorkoutSession {
    day: DayOfWeek,
    muscle_groups: Vec<MuscleGroup>,
    exercises: Vec<ExerciseConfig>,
    started_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// Begin a session for a scheduled training day
    ///
    /// Completion flags stored with the schedule are ignored; every session
    /// starts with all exercises incomplete.
    pub fn start(workout: &DayWorkout, now: DateTime<Utc>) -> Result<Self> {
        if workout.is_rest_day || workout.exercises.is_empty() {
            return Err(Error::NoWorkoutScheduled(workout.day.to_string()));
        }

        let exercises = workout
            .exercises
            .iter()
            .cloned()
            .map(|mut e| {
                e.completed = false;
                e
            })
            .collect();

        tracing::info!(
            "Started {} workout with {} exercises",
            workout.day,
            workout.exercises.len()
        );

        Ok(Self {
            day: workout.day,
            muscle_groups: workout.muscle_groups.clone(),
            exercises,
            started_at: now,
        })
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

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Flip the completion flag of one exercise; returns the new value
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let exercise = self.exercise_mut(index)?;
        exercise.completed = !exercise.completed;
        Ok(exercise.completed)
    }

    /// Set the completion flag of one exercise, whatever it was before
    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<()> {
        self.exercise_mut(index)?.completed = completed;
        Ok(())
    }

    /// Mark every exercise completed
    pub fn complete_all(&mut self) {
        for exercise in &mut self.exercises {
            exercise.completed = true;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    /// Fraction of exercises completed, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.exercises.len() as f64
    }

    pub fn is_all_completed(&self) -> bool {
        self.completed_count() == self.exercises.len()
    }

    fn exercise_mut(&mut self, index: usize) -> Result<&mut ExerciseConfig> {
        let len = self.exercises.len();
        self.exercises.get_mut(index).ok_or_else(|| {
            Error::Session(format!(
                "exercise index {} out of range (workout has {})",
                index, len
            ))
        })
    }

    /// End the session and build its log entry
    ///
    /// Duration is the elapsed time rounded to the nearest minute. The log
    /// is marked completed only if every exercise was.
    pub fn finish(self, now: DateTime<Utc>) -> WorkoutLog {
        let elapsed_secs = (now - self.started_at).num_seconds().max(0);
        let duration = (elapsed_secs as f64 / 60.0).round() as u32;
        let completed = self.is_all_completed();

        tracing::info!(
            "Finished {} workout: {}/{} exercises in {} min",
            self.day,
            self.completed_count(),
            self.exercises.len(),
            duration
        );

        WorkoutLog {
            id: Uuid::new_v4().to_string(),
            date: now,
            day: self.day,
            exercises: self.exercises,
            duration: Some(duration),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_exercises;
    use chrono::{Duration, TimeZone};

    fn legs_day() -> DayWorkout {
        let groups = vec![MuscleGroup::Legs];
        DayWorkout::training(DayOfWeek::Tuesday, groups.clone(), generate_exercises(&groups))
    }

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 12, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_rest_day_cannot_start() {
        let result = WorkoutSession::start(&DayWorkout::rest(DayOfWeek::Sunday), start_time());
        assert!(matches!(result, Err(Error::NoWorkoutScheduled(_))));
    }

    #[test]
    fn test_empty_training_day_cannot_start() {
        let empty = DayWorkout::training(DayOfWeek::Monday, vec![MuscleGroup::Arms], vec![]);
        assert!(WorkoutSession::start(&empty, start_time()).is_err());
    }

    #[test]
    fn test_start_resets_completion() {
        let mut day = legs_day();
        day.exercises[0].completed = true;
        day.exercises[3].completed = true;

        let session = WorkoutSession::start(&day, start_time()).unwrap();
        assert_eq!(session.completed_count(), 0);
        assert_eq!(session.exercises().len(), 5);
    }

    #[test]
    fn test_toggle_any_order_any_times() {
        let mut session = WorkoutSession::start(&legs_day(), start_time()).unwrap();

        assert!(session.toggle(4).unwrap());
        assert!(session.toggle(0).unwrap());
        assert!(!session.toggle(4).unwrap());
        assert!(session.toggle(4).unwrap());
        assert_eq!(session.completed_count(), 2);
        assert!((session.progress() - 0.4).abs() < 1e-9);

        assert!(matches!(session.toggle(5), Err(Error::Session(_))));
    }

    #[test]
    fn test_set_completed_is_idempotent() {
        let mut session = WorkoutSession::start(&legs_day(), start_time()).unwrap();

        session.set_completed(1, true).unwrap();
        session.set_completed(1, true).unwrap();
        assert_eq!(session.completed_count(), 1);
        assert!(session.exercises()[1].completed);

        session.set_completed(1, false).unwrap();
        assert_eq!(session.completed_count(), 0);
        assert!(matches!(
            session.set_completed(9, true),
            Err(Error::Session(_))
        ));
    }

    #[test]
    fn test_finish_all_completed() {
        let mut session = WorkoutSession::start(&legs_day(), start_time()).unwrap();
        session.complete_all();

        let log = session.finish(start_time() + Duration::seconds(45 * 60 + 40));
        assert!(log.completed);
        assert_eq!(log.duration, Some(46));
        assert_eq!(log.day, DayOfWeek::Tuesday);
        assert_eq!(log.completed_exercises(), 5);
    }

    #[test]
    fn test_finish_early_is_not_completed() {
        let mut session = WorkoutSession::start(&legs_day(), start_time()).unwrap();
        session.toggle(1).unwrap();

        let log = session.finish(start_time() + Duration::minutes(10));
        assert!(!log.completed);
        assert_eq!(log.exercises.len(), 5);
        assert_eq!(log.completed_exercises(), 1);
        assert!(log.exercises[1].completed);
    }

    #[test]
    fn test_finish_with_clock_skew_has_zero_duration() {
        let session = WorkoutSession::start(&legs_day(), start_time()).unwrap();
        let log = session.finish(start_time() - Duration::minutes(3));
        assert_eq!(log.duration, Some(0));
    }
}
