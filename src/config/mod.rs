//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Analysis window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Finished matches per team feeding form and predictions
    #[serde(default = "default_form_window")]
    pub form_window: usize,

    /// Prior seasons to walk back for head-to-head
    #[serde(default = "default_season_depth")]
    pub season_depth: usize,

    /// Head-to-head recency window in years
    #[serde(default = "default_h2h_years")]
    pub h2h_years: u32,

    /// Recent league results window in days
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,

    /// Finished matches shown on a team overview
    #[serde(default = "default_team_history_limit")]
    pub team_history_limit: usize,

    /// Upcoming fixtures shown on a team overview
    #[serde(default = "default_team_upcoming_limit")]
    pub team_upcoming_limit: usize,
}

fn default_form_window() -> usize {
    5
}

fn default_season_depth() -> usize {
    2
}

fn default_h2h_years() -> u32 {
    3
}

fn default_recent_days() -> u32 {
    5
}

fn default_team_history_limit() -> usize {
    20
}

fn default_team_upcoming_limit() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            form_window: default_form_window(),
            season_depth: default_season_depth(),
            h2h_years: default_h2h_years(),
            recent_days: default_recent_days(),
            team_history_limit: default_team_history_limit(),
            team_upcoming_limit: default_team_upcoming_limit(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Rows per list in text output
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

fn default_pretty() -> bool {
    true
}

fn default_display_limit() -> usize {
    10
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            display_limit: default_display_limit(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.form_window == 0 {
            return Err(ConfigError::ValidationError(
                "form_window must be greater than 0".to_string(),
            ));
        }

        if self.analysis.h2h_years == 0 {
            return Err(ConfigError::ValidationError(
                "h2h_years must be greater than 0".to_string(),
            ));
        }

        if self.analysis.recent_days == 0 {
            return Err(ConfigError::ValidationError(
                "recent_days must be greater than 0".to_string(),
            ));
        }

        if self.output.display_limit == 0 {
            return Err(ConfigError::ValidationError(
                "display_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
