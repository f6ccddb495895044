//! CSV export of the workout history.

use crate::{Result, WorkoutLog};
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    date: String,
    day: String,
    exercises: usize,
    exercises_completed: usize,
    duration_minutes: Option<u32>,
    completed: bool,
}

impl From<&WorkoutLog> for CsvRow {
    fn from(log: &WorkoutLog) -> Self {
        CsvRow {
            id: log.id.clone(),
            date: log.date.to_rfc3339(),
            day: log.day.to_string(),
            exercises: log.exercises.len(),
            exercises_completed: log.completed_exercises(),
            duration_minutes: log.duration,
            completed: log.completed,
        }
    }
}

/// Write `logs` to a new CSV file at `path`, replacing any existing file
///
/// The file is synced to disk before returning. Returns the row count.
pub fn export_logs_csv(logs: &[WorkoutLog], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);

    for log in logs {
        writer.serialize(CsvRow::from(log))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    file.sync_all()?;

    tracing::info!("Exported {} logs to {:?}", logs.len(), path);
    Ok(logs.len())
}
