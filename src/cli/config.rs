//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Set the messaging recipient
    SetRecipient {
        /// Recipient address, e.g. a phone number in international format
        value: String,
    },
    /// Set the link appended to share messages
    SetLink {
        /// Link URL
        value: String,
    },
    /// Set the theme mode (auto, light or dark)
    SetTheme {
        /// Theme mode
        value: String,
    },
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    ui: UiOutput,
    messaging: &'a crate::config::MessagingConfig,
    share: &'a crate::config::ShareConfig,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_path()?);
                Ok(())
            }
            ConfigCommand::SetRecipient { value } => update(|config| {
                config
                    .set_recipient(value.trim())
                    .map_err(|e| CliError::validation(e.to_string()))
            }),
            ConfigCommand::SetLink { value } => update(|config| {
                config
                    .set_share_link(value)
                    .map_err(|e| CliError::validation(e.to_string()))
            }),
            ConfigCommand::SetTheme { value } => update(|config| {
                config.ui.theme_mode = parse_theme(value)?;
                Ok(())
            }),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load()?;

        if self.json {
            let output = ConfigOutput {
                path: config_path()?,
                ui: UiOutput {
                    theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
                    show_help_on_startup: config.ui.show_help_on_startup,
                },
                messaging: &config.messaging,
                share: &config.share,
            };
            return print_json(&output);
        }

        println!("Config file: {}", config_path()?);
        println!();
        println!("[ui]");
        println!(
            "  theme:                {}",
            format!("{:?}", config.ui.theme_mode).to_lowercase()
        );
        println!("  show_help_on_startup: {}", config.ui.show_help_on_startup);
        println!("[messaging]");
        println!("  host:                 {}", config.messaging.host);
        println!("  recipient:            {}", config.messaging.recipient);
        println!("[share]");
        println!("  link:                 {}", config.share.link);
        Ok(())
    }
}

fn config_path() -> CliResult<String> {
    Config::config_file_path()
        .map(|path| path.display().to_string())
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {}", e)))
}

fn load() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))
}

/// Loads, applies `change`, saves.
fn update(change: impl FnOnce(&mut Config) -> CliResult<()>) -> CliResult<()> {
    let mut config = load()?;
    change(&mut config)?;
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;
    println!("Configuration updated successfully.");
    Ok(())
}

fn parse_theme(value: &str) -> CliResult<ThemeMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}
