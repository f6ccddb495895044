#![forbid(unsafe_code)]

//! Core domain model and data layer for the Gymlog workout tracker.
//!
//! This crate provides:
//! - Domain types (exercises, weekly schedule, workout logs)
//! - Static exercise and program catalogs
//! - Persistence (key-value backend, schedule store, log store)
//! - Derivations (exercise auto-generation, weekly stats, streaks)
//! - Workout session and day draft editing

pub mod types;
pub mod error;
pub mod catalog;
pub mod programs;
pub mod config;
pub mod logging;
pub mod storage;
pub mod schedule;
pub mod history;
pub mod generate;
pub mod stats;
pub mod session;
pub mod draft;
pub mod body;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{get_default_catalog, ExerciseCatalog};
pub use programs::get_default_programs;
pub use config::Config;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use schedule::ScheduleStore;
pub use history::{LogStore, MAX_LOGS};
pub use generate::generate_exercises;
pub use stats::{current_streak, goal_progress, weekly_stats, WeeklyStats};
pub use session::WorkoutSession;
pub use draft::DayDraft;
