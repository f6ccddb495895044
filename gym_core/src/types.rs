//! Core domain types for the Gymlog system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle groups and days of the week
//! - Catalog exercises and predefined programs
//! - The user's weekly schedule and per-exercise configuration
//! - Workout logs

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Muscle Groups and Days
// ============================================================================

/// Muscle group an exercise trains
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 7] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Core,
        MuscleGroup::Cardio,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        MuscleGroup::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::InvalidInput(format!("unknown muscle group '{}'", s)))
    }
}

/// Day of the week, ordered Monday first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// The weekday of a UTC timestamp
    pub fn of(at: DateTime<Utc>) -> Self {
        use chrono::Datelike;
        at.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = crate::Error;

    /// Accepts full names or three-letter abbreviations, any case
    fn from_str(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|d| {
                d.name().eq_ignore_ascii_case(s)
                    || (s.len() == 3 && d.name()[..3].eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| crate::Error::InvalidInput(format!("unknown day '{}'", s)))
    }
}

// ============================================================================
// Reference Data
// ============================================================================

/// A catalog exercise (e.g., "Barbell Bench Press")
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub description: String,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
    pub default_sets: u32,
    pub default_reps: String,
    pub demo_url: Option<String>,
}

impl Exercise {
    pub fn targets(&self, group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&group)
    }
}

/// Difficulty of a predefined program
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// One day of a predefined program
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutineDay {
    pub id: String,
    pub title: String,
    pub exercise_ids: Vec<String>,
}

/// A predefined multi-day routine, for browsing only
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: Level,
    pub days: Vec<RoutineDay>,
}

// ============================================================================
// User Schedule
// ============================================================================

/// User configuration for one exercise within a day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseConfig {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Only meaningful during an active session
    #[serde(default)]
    pub completed: bool,
}

impl ExerciseConfig {
    /// Config using the exercise's default volume
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            sets: exercise.default_sets,
            reps: exercise.default_reps.clone(),
            weight: None,
            completed: false,
        }
    }
}

/// One day of the user's weekly schedule
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayWorkout {
    pub day: DayOfWeek,
    pub muscle_groups: Vec<MuscleGroup>,
    pub exercises: Vec<ExerciseConfig>,
    pub is_rest_day: bool,
}

impl DayWorkout {
    /// The default entry: a rest day with nothing selected
    pub fn rest(day: DayOfWeek) -> Self {
        Self {
            day,
            muscle_groups: Vec::new(),
            exercises: Vec::new(),
            is_rest_day: true,
        }
    }

    /// A training day with the given groups and exercises
    pub fn training(
        day: DayOfWeek,
        muscle_groups: Vec<MuscleGroup>,
        exercises: Vec<ExerciseConfig>,
    ) -> Self {
        Self {
            day,
            muscle_groups,
            exercises,
            is_rest_day: false,
        }
    }

    /// Enforce the rest-day invariant (rest day => nothing selected)
    fn normalized(mut self, day: DayOfWeek) -> Self {
        self.day = day;
        if self.is_rest_day {
            self.muscle_groups.clear();
            self.exercises.clear();
        }
        self
    }
}

/// The full 7-day schedule, persisted as one record
///
/// Always holds exactly one entry per day. Records missing a day are
/// filled with the rest-day default when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<DayOfWeek, DayWorkout>",
    into = "BTreeMap<DayOfWeek, DayWorkout>"
)]
pub struct WeeklySchedule {
    days: BTreeMap<DayOfWeek, DayWorkout>,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            days: DayOfWeek::ALL
                .into_iter()
                .map(|d| (d, DayWorkout::rest(d)))
                .collect(),
        }
    }
}

impl From<BTreeMap<DayOfWeek, DayWorkout>> for WeeklySchedule {
    fn from(mut raw: BTreeMap<DayOfWeek, DayWorkout>) -> Self {
        let days = DayOfWeek::ALL
            .into_iter()
            .map(|d| {
                let entry = raw.remove(&d).unwrap_or_else(|| DayWorkout::rest(d));
                (d, entry.normalized(d))
            })
            .collect();
        Self { days }
    }
}

impl From<WeeklySchedule> for BTreeMap<DayOfWeek, DayWorkout> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.days
    }
}

impl WeeklySchedule {
    pub fn day(&self, day: DayOfWeek) -> &DayWorkout {
        // Every constructor populates all seven days
        &self.days[&day]
    }

    /// Replace the whole entry for its day
    pub fn set_day(&mut self, workout: DayWorkout) {
        let day = workout.day;
        self.days.insert(day, workout.normalized(day));
    }

    /// Days in Monday-first order
    pub fn iter(&self) -> impl Iterator<Item = &DayWorkout> {
        self.days.values()
    }

    pub fn training_days(&self) -> usize {
        self.iter().filter(|d| !d.is_rest_day).count()
    }
}

// ============================================================================
// Workout Logs
// ============================================================================

/// A finished (or early-finished) workout session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// UUID for new logs; older records use a millisecond timestamp
    pub id: String,
    pub date: DateTime<Utc>,
    pub day: DayOfWeek,
    pub exercises: Vec<ExerciseConfig>,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub completed: bool,
}

impl WorkoutLog {
    pub fn completed_exercises(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }
}
