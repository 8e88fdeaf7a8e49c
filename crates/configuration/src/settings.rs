use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How the dashboard page is produced.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Page title shown above both sections.
    pub title: String,
    /// Dump the raw and sorted records above each table.
    pub show_debug_data: bool,
    /// Where the HTML page is written when no path is given on the command line.
    pub output_path: PathBuf,
    pub format: Format,
}

/// Logging setup for the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// A `tracing` filter directive, e.g. "info" or "presenter=debug".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

/// Output format of the rendered dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Console,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Stock Screener".to_string(),
            show_debug_data: false,
            output_path: PathBuf::from("dashboard.html"),
            format: Format::Html,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.title.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "dashboard.title must not be empty".to_string(),
            ));
        }

        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ConfigError::ValidationError(format!(
                "logging.level '{}' is not a valid filter: {e}",
                self.logging.level
            ))
        })?;

        Ok(())
    }
}
