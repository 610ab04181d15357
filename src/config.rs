//! Server configuration
//!
//! Loaded from a YAML file at startup. Every field has a default so a
//! missing file or a partial config still yields a runnable server.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::planning::alerts::AlertThresholds;
use crate::planning::projector::DEFAULT_REVENUE_PER_ADMISSION;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub data: DataConfig,
    pub planning: PlanningConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Optional JSON file of records loaded into the store at startup
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Rough revenue proxy per admission used in leakage estimates
    pub revenue_per_admission: f64,
    pub thresholds: AlertThresholds,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        PlanningConfig {
            revenue_per_admission: DEFAULT_REVENUE_PER_ADMISSION,
            thresholds: AlertThresholds::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read config: {}", err),
            ConfigError::Parse(err) => write!(f, "Failed to parse config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        println!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
