use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use configuration::{Config, Format, LoggingSettings};
use core_types::{Direction, Signal};
use dashboard::{ConsoleDashboard, HtmlDashboard};
use presenter::{RenderSurface, SignalPresenter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// The main entry point for the signal board.
fn main() -> Result<()> {
    // Load environment overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Render(args) => {
            let config = match &args.config {
                Some(path) => configuration::load_config_from(path),
                None => configuration::load_config(),
            }
            .context("Failed to load configuration")?;

            // Held until exit so buffered file logs are flushed.
            let _guard = init_tracing(&config.logging)?;
            handle_render(args, &config)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks screener buy/sell signals and renders them as a dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the top buy and sell candidates.
    Render(RenderArgs),
}

#[derive(Parser)]
struct RenderArgs {
    /// JSON file holding an array of buy signals. Omit for an empty section.
    #[arg(long)]
    buy: Option<PathBuf>,

    /// JSON file holding an array of sell signals. Omit for an empty section.
    #[arg(long)]
    sell: Option<PathBuf>,

    /// Output format (defaults to `dashboard.format` from the configuration).
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Where to write the HTML page (defaults to `dashboard.output_path`).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the raw and sorted records above each table.
    #[arg(long)]
    debug_data: bool,
}

// ==============================================================================
// Render Command Logic
// ==============================================================================

fn handle_render(args: RenderArgs, config: &Config) -> Result<()> {
    let buy = read_signals(args.buy.as_deref())?;
    let sell = read_signals(args.sell.as_deref())?;

    let presenter = SignalPresenter::new()
        .with_debug_data(args.debug_data || config.dashboard.show_debug_data);

    match args.format.unwrap_or(config.dashboard.format) {
        Format::Html => {
            let mut page = HtmlDashboard::new();
            render_sections(&presenter, buy, sell, &mut page)?;

            let path = args
                .output
                .unwrap_or_else(|| config.dashboard.output_path.clone());
            fs::write(&path, page.finish(&config.dashboard.title, Utc::now()))
                .with_context(|| format!("Failed to write dashboard to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Dashboard written.");
        }
        Format::Console => {
            let mut console = ConsoleDashboard::new();
            render_sections(&presenter, buy, sell, &mut console)?;
            print!("{}", console.output());
        }
    }

    Ok(())
}

/// Buy section first, then sell.
fn render_sections(
    presenter: &SignalPresenter,
    buy: Vec<Signal>,
    sell: Vec<Signal>,
    surface: &mut dyn RenderSurface,
) -> Result<()> {
    presenter
        .present(buy, Direction::Buy, surface)
        .context("Failed to render buy candidates")?;
    presenter
        .present(sell, Direction::Sell, surface)
        .context("Failed to render sell candidates")?;
    Ok(())
}

fn read_signals(path: Option<&Path>) -> Result<Vec<Signal>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read signals from {}", path.display()))?;
    let signals: Vec<Signal> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of signal records", path.display()))?;

    tracing::debug!(path = %path.display(), count = signals.len(), "Loaded signals.");
    Ok(signals)
}

/// Logs to stderr, plus a daily rolling file when a log directory is configured.
fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("Invalid log filter")?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "signal-board.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_arguments_parse() {
        let cli = Cli::try_parse_from([
            "signal-board",
            "render",
            "--buy",
            "buy.json",
            "--format",
            "console",
            "--debug-data",
        ])
        .unwrap();

        let Commands::Render(args) = cli.command;
        assert_eq!(args.buy.as_deref(), Some(Path::new("buy.json")));
        assert!(args.sell.is_none());
        assert_eq!(args.format, Some(Format::Console));
        assert!(args.debug_data);
    }

    #[test]
    fn missing_signal_file_means_empty_section() {
        assert!(read_signals(None).unwrap().is_empty());
        assert!(read_signals(Some(Path::new("no-such-signals.json"))).is_err());
    }
}
