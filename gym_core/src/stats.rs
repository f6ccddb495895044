//! Statistics derived from the workout log.

use crate::WorkoutLog;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

/// Trailing window for weekly statistics
pub const WEEK_WINDOW_DAYS: i64 = 7;
/// How far back the streak scan looks
pub const STREAK_SCAN_DAYS: i64 = 30;

/// Completed workouts in the trailing week
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WeeklyStats {
    pub workouts_completed: usize,
    pub total_exercises: usize,
}

/// Summarize completed logs dated within 7 days before `now` (inclusive)
pub fn weekly_stats(logs: &[WorkoutLog], now: DateTime<Utc>) -> WeeklyStats {
    let cutoff = now - Duration::days(WEEK_WINDOW_DAYS);

    logs.iter()
        .filter(|log| log.completed && log.date >= cutoff)
        .fold(WeeklyStats::default(), |mut stats, log| {
            stats.workouts_completed += 1;
            stats.total_exercises += log.exercises.len();
            stats
        })
}

/// Consecutive days with a completed workout, counting back from `today`
///
/// Days are compared by UTC calendar date. Today not having a workout yet
/// does not break the streak; any earlier gap does.
pub fn current_streak(logs: &[WorkoutLog], today: NaiveDate) -> u32 {
    let mut streak = 0;

    for offset in 0..STREAK_SCAN_DAYS {
        let day = today - Duration::days(offset);
        let qualifies = logs
            .iter()
            .any(|log| log.completed && log.date.date_naive() == day);

        if qualifies {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }

    streak
}

/// Fraction of the weekly goal reached, capped at 1.0
pub fn goal_progress(stats: &WeeklyStats, goal: u32) -> f64 {
    if goal == 0 {
        return 1.0;
    }
    (stats.workouts_completed as f64 / goal as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayOfWeek, ExerciseConfig};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn config(id: &str) -> ExerciseConfig {
        ExerciseConfig {
            exercise_id: id.into(),
            sets: 3,
            reps: "10".into(),
            weight: None,
            completed: true,
        }
    }

    fn log_at(date: DateTime<Utc>, completed: bool, exercises: &[&str]) -> WorkoutLog {
        WorkoutLog {
            id: Uuid::new_v4().to_string(),
            date,
            day: DayOfWeek::of(date),
            exercises: exercises.iter().map(|id| config(id)).collect(),
            duration: Some(30),
            completed,
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_weekly_stats_window() {
        let now = noon(2024, 3, 15);
        let logs = vec![
            log_at(now - Duration::days(1), true, &["a", "b"]),
            log_at(now - Duration::days(10), true, &["c"]),
        ];

        let stats = weekly_stats(&logs, now);
        assert_eq!(
            stats,
            WeeklyStats {
                workouts_completed: 1,
                total_exercises: 2
            }
        );
    }

    #[test]
    fn test_weekly_stats_ignores_incomplete() {
        let now = noon(2024, 3, 15);
        let logs = vec![
            log_at(now - Duration::hours(2), false, &["a", "b", "c"]),
            log_at(now - Duration::days(2), true, &["d"]),
        ];

        let stats = weekly_stats(&logs, now);
        assert_eq!(stats.workouts_completed, 1);
        assert_eq!(stats.total_exercises, 1);
    }

    #[test]
    fn test_weekly_stats_boundary_inclusive() {
        let now = noon(2024, 3, 15);
        let logs = vec![
            log_at(now - Duration::days(7), true, &["a"]),
            log_at(now - Duration::days(7) - Duration::seconds(1), true, &["b"]),
        ];
        assert_eq!(weekly_stats(&logs, now).workouts_completed, 1);
    }

    #[test]
    fn test_streak_three_consecutive_days() {
        let today = noon(2024, 3, 15);
        let logs = vec![
            log_at(today, true, &["a"]),
            log_at(today - Duration::days(1), true, &["a"]),
            log_at(today - Duration::days(2), true, &["a"]),
        ];
        assert_eq!(current_streak(&logs, today.date_naive()), 3);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let today = noon(2024, 3, 15);
        let logs = vec![
            log_at(today, true, &["a"]),
            log_at(today - Duration::days(1), true, &["a"]),
            // nothing on day -2
            log_at(today - Duration::days(3), true, &["a"]),
            log_at(today - Duration::days(4), true, &["a"]),
        ];
        assert_eq!(current_streak(&logs, today.date_naive()), 2);
    }

    #[test]
    fn test_streak_missing_today_is_not_a_gap() {
        // Asymmetric on purpose: offset 0 may be empty, offset 1+ may not.
        let today = noon(2024, 3, 15);
        let logs = vec![
            log_at(today - Duration::days(1), true, &["a"]),
            log_at(today - Duration::days(2), true, &["a"]),
        ];
        assert_eq!(current_streak(&logs, today.date_naive()), 2);

        let gap_yesterday = vec![log_at(today - Duration::days(2), true, &["a"])];
        assert_eq!(current_streak(&gap_yesterday, today.date_naive()), 0);
    }

    #[test]
    fn test_streak_compares_calendar_dates() {
        let today = noon(2024, 3, 15);
        let logs = vec![
            log_at(Utc.with_ymd_and_hms(2024, 3, 15, 0, 5, 0).unwrap(), true, &["a"]),
            log_at(Utc.with_ymd_and_hms(2024, 3, 14, 23, 55, 0).unwrap(), true, &["a"]),
            log_at(Utc.with_ymd_and_hms(2024, 3, 13, 8, 0, 0).unwrap(), false, &["a"]),
        ];
        assert_eq!(current_streak(&logs, today.date_naive()), 2);
    }

    #[test]
    fn test_streak_capped_by_scan_window() {
        let today = noon(2024, 3, 15);
        let logs: Vec<_> = (0..40)
            .map(|d| log_at(today - Duration::days(d), true, &["a"]))
            .collect();
        assert_eq!(current_streak(&logs, today.date_naive()), 30);
    }

    #[test]
    fn test_streak_empty_logs() {
        assert_eq!(current_streak(&[], noon(2024, 3, 15).date_naive()), 0);
    }

    #[test]
    fn test_goal_progress() {
        let stats = WeeklyStats {
            workouts_completed: 2,
            total_exercises: 8,
        };
        assert!((goal_progress(&stats, 5) - 0.4).abs() < f64::EPSILON);
        assert_eq!(goal_progress(&stats, 1), 1.0);
        assert_eq!(goal_progress(&stats, 0), 1.0);
    }
}
