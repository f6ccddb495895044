//! Configuration file support for Gymlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gymlog/config.toml`.
//! Every field has a default, so the file is optional and may be partial.

use crate::draft::DEFAULT_MINUTES_PER_EXERCISE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub goals: GoalsConfig,

    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Progress targets
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_weekly_workouts")]
    pub weekly_workouts: u32,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            weekly_workouts: default_weekly_workouts(),
        }
    }
}

/// Day planning parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_minutes_per_exercise")]
    pub minutes_per_exercise: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            minutes_per_exercise: default_minutes_per_exercise(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gymlog")
}

fn default_weekly_workouts() -> u32 {
    5
}

fn default_minutes_per_exercise() -> u32 {
    DEFAULT_MINUTES_PER_EXERCISE
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gymlog")
            .join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.goals.weekly_workouts == 0 {
            return Err(Error::Config("goals.weekly_workouts must be at least 1".into()));
        }
        if self.planner.minutes_per_exercise == 0 {
            return Err(Error::Config(
                "planner.minutes_per_exercise must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
