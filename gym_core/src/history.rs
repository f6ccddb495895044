//! Workout log persistence.
//!
//! Logs are kept most-recent-first in a single record capped at
//! [`MAX_LOGS`] entries. Anything older is dropped on the next append.

use crate::stats::{self, WeeklyStats};
use crate::storage::{self, KeyValueStore, LOGS_KEY};
use crate::{Result, WorkoutLog};
use chrono::{DateTime, NaiveDate, Utc};

/// Retention bound for the persisted log list
pub const MAX_LOGS: usize = 100;

/// Log operations over a key-value backend
pub struct LogStore<'a, S: KeyValueStore + ?Sized> {
    backend: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> LogStore<'a, S> {
    pub fn new(backend: &'a S) -> Self {
        Self { backend }
    }

    /// All stored logs, most recent first; empty if none or unreadable
    pub fn load(&self) -> Vec<WorkoutLog> {
        storage::read_json(self.backend, LOGS_KEY).unwrap_or_default()
    }

    /// Prepend `log`, truncate to [`MAX_LOGS`], persist
    pub fn append(&self, log: WorkoutLog) -> Result<()> {
        let mut logs = self.load();
        let id = log.id.clone();
        logs.insert(0, log);

        if logs.len() > MAX_LOGS {
            tracing::debug!("Dropping {} oldest logs", logs.len() - MAX_LOGS);
            logs.truncate(MAX_LOGS);
        }

        storage::write_json(self.backend, LOGS_KEY, &logs)?;
        tracing::info!("Saved workout log {} ({} stored)", id, logs.len());
        Ok(())
    }

    /// The `n` most recent logs
    pub fn recent(&self, n: usize) -> Vec<WorkoutLog> {
        let mut logs = self.load();
        logs.truncate(n);
        logs
    }

    /// Completed workouts in the 7 days up to now
    pub fn weekly_stats(&self) -> WeeklyStats {
        self.weekly_stats_at(Utc::now())
    }

    pub fn weekly_stats_at(&self, now: DateTime<Utc>) -> WeeklyStats {
        stats::weekly_stats(&self.load(), now)
    }

    /// Current streak ending today (or yesterday)
    pub fn streak(&self, today: NaiveDate) -> u32 {
        stats::current_streak(&self.load(), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use crate::{DayOfWeek, ExerciseConfig};
    use chrono::Duration;
    use uuid::Uuid;

    fn create_test_log(days_ago: i64, completed: bool, exercise_count: usize) -> WorkoutLog {
        let date = Utc::now() - Duration::days(days_ago);
        WorkoutLog {
            id: Uuid::new_v4().to_string(),
            date,
            day: DayOfWeek::of(date),
            exercises: (0..exercise_count)
                .map(|i| ExerciseConfig {
                    exercise_id: format!("ex_{}", i),
                    sets: 3,
                    reps: "10".into(),
                    weight: None,
                    completed,
                })
                .collect(),
            duration: Some(45),
            completed,
        }
    }

    #[test]
    fn test_load_empty() {
        let backend = MemoryStore::new();
        assert!(LogStore::new(&backend).load().is_empty());
    }

    #[test]
    fn test_append_prepends() {
        let backend = MemoryStore::new();
        let store = LogStore::new(&backend);

        let first = create_test_log(2, true, 1);
        let second = create_test_log(1, true, 2);
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let logs = store.load();
        assert_eq!(logs, vec![second, first]);
    }

    #[test]
    fn test_retention_keeps_most_recent_hundred() {
        let backend = MemoryStore::new();
        let store = LogStore::new(&backend);

        let mut ids = Vec::new();
        for _ in 0..105 {
            let log = create_test_log(0, true, 1);
            ids.push(log.id.clone());
            store.append(log).unwrap();
        }

        let logs = store.load();
        assert_eq!(logs.len(), MAX_LOGS);
        let expected: Vec<_> = ids.iter().rev().take(MAX_LOGS).cloned().collect();
        let actual: Vec<_> = logs.iter().map(|l| l.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_weekly_stats_from_store() {
        let backend = MemoryStore::new();
        let store = LogStore::new(&backend);
        store.append(create_test_log(10, true, 1)).unwrap();
        store.append(create_test_log(1, true, 2)).unwrap();

        let stats = store.weekly_stats();
        assert_eq!(stats.workouts_completed, 1);
        assert_eq!(stats.total_exercises, 2);
    }

    #[test]
    fn test_recent() {
        let backend = MemoryStore::new();
        let store = LogStore::new(&backend);
        for d in (0..15).rev() {
            store.append(create_test_log(d, true, 1)).unwrap();
        }

        let recent = store.recent(10);
        assert_eq!(recent.len(), 10);
        assert!(recent[0].date > recent[9].date);
    }

    #[test]
    fn test_streak_from_store() {
        let backend = MemoryStore::new();
        let store = LogStore::new(&backend);
        store.append(create_test_log(1, true, 1)).unwrap();
        store.append(create_test_log(0, true, 1)).unwrap();

        assert_eq!(store.streak(Utc::now().date_naive()), 2);
    }

    #[test]
    fn test_logs_persist_as_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = FileStore::new(temp_dir.path());
        let store = LogStore::new(&backend);
        store.append(create_test_log(0, false, 2)).unwrap();

        let raw = std::fs::read_to_string(backend.path_for(LOGS_KEY)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["completed"], false);
        assert_eq!(json[0]["exercises"][0]["exerciseId"], "ex_0");
    }

    #[test]
    fn test_corrupted_logs_load_empty_and_append_recovers() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = FileStore::new(temp_dir.path());
        std::fs::write(backend.path_for(LOGS_KEY), "[{\"id\":").unwrap();

        let store = LogStore::new(&backend);
        assert!(store.load().is_empty());

        store.append(create_test_log(0, true, 1)).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_timestamp_id_records_load_and_survive_append() {
        let backend = MemoryStore::new();
        backend
            .set(
                LOGS_KEY,
                r#"[
                {"id":"1710504000000","date":"2024-03-15T12:00:00.000Z","day":"Friday",
                 "exercises":[{"exerciseId":"squat","sets":4,"reps":"6-8","completed":true}],
                 "duration":42,"completed":true},
                {"id":"1710417600000","date":"2024-03-14T12:00:00.000Z","day":"Thursday",
                 "exercises":[{"exerciseId":"planks","sets":3,"reps":"45-60 sec","completed":false}],
                 "duration":20,"completed":false}
            ]"#,
            )
            .unwrap();
        let store = LogStore::new(&backend);

        let logs = store.load();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].id, "1710504000000");
        assert_eq!(logs[0].day, DayOfWeek::Friday);
        assert_eq!(logs[1].duration, Some(20));

        let new_log = create_test_log(0, true, 1);
        store.append(new_log.clone()).unwrap();

        let ids: Vec<_> = store.load().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![new_log.id, "1710504000000".into(), "1710417600000".into()]);
    }
}
