//! Error types for the gym_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gym_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Exercise id not present in the catalog
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// Exercise already part of the day's workout
    #[error("Exercise {0} is already in this workout")]
    DuplicateExercise(String),

    /// Rest day or empty exercise list
    #[error("No workout scheduled for {0}")]
    NoWorkoutScheduled(String),

    /// Workout session misuse (e.g. index out of range)
    #[error("Session error: {0}")]
    Session(String),

    /// Rejected user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
