use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DashboardSettings, Format, LoggingSettings};

/// Prefix of environment variables that override file settings,
/// e.g. `SIGNAL_BOARD__DASHBOARD__SHOW_DEBUG_DATA=true`.
pub const ENV_PREFIX: &str = "SIGNAL_BOARD";

/// Loads the application configuration from `config.toml` in the working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the configuration from `path`, layered with environment overrides.
///
/// A missing file is not an error; every setting has a default.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        finish(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.dashboard.title, "Stock Screener");
        assert!(!config.dashboard.show_debug_data);
        assert_eq!(config.dashboard.format, Format::Html);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = from_toml(
            r#"
            [dashboard]
            title = "BSE Swing Screener"
            show_debug_data = true
            format = "console"

            [logging]
            level = "presenter=debug,info"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.title, "BSE Swing Screener");
        assert!(config.dashboard.show_debug_data);
        assert_eq!(config.dashboard.format, Format::Console);
        assert_eq!(config.dashboard.output_path, Path::new("dashboard.html"));
        assert_eq!(config.logging.directory.as_deref(), Some(Path::new("logs")));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = from_toml("[dashboard]\ntitle = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = from_toml("[logging]\nlevel = \"presenter=loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = load_config_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.dashboard.format, Format::Html);
    }
}
