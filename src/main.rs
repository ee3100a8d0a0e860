//! Tapiz Designer - terminal configurator for handmade tapestries
//!
//! Without a subcommand the interactive editor starts; subcommands give
//! headless access for scripting.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use tapiz_designer::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use tapiz_designer::cli::Command;
use tapiz_designer::config::Config;
use tapiz_designer::{logging, tui};

/// Tapiz Designer - personalize a handmade tapestry and request a quote
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        logging::init_stderr(cli.verbose);
        if let Err(e) = command.execute() {
            eprintln!("Error: {}", e.message);
            std::process::exit(e.code.as_i32());
        }
        return Ok(());
    }

    run_interactive(cli.verbose)
}

fn run_interactive(verbose: bool) -> Result<()> {
    // Logging is best effort; the editor works without a log file
    match logging::log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file(&path, verbose) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to load config, using defaults");
            eprintln!("Warning: Failed to load config: {e:#}");
            Config::default()
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), "starting interactive editor");

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    tui::restore_terminal(terminal)?;

    info!(favorites = app_state.session.favorites().len(), "editor closed");
    result
}
