//! CLI command handlers for Tapiz Designer.
//!
//! Headless, scriptable access to the catalogs, quotes, previews and
//! messages, for automation and testing.

pub mod common;
pub mod config;
pub mod designs;
pub mod message;
pub mod presets;
pub mod preview;
pub mod quote;

use clap::Subcommand;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, SessionArgs};
pub use config::ConfigArgs;
pub use designs::DesignsArgs;
pub use message::{MessageArgs, SendArgs};
pub use presets::PresetsArgs;
pub use preview::PreviewArgs;
pub use quote::QuoteArgs;

/// Headless subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available designs
    Designs(DesignsArgs),
    /// List preset palettes
    Presets(PresetsArgs),
    /// Show the quote for a design
    Quote(QuoteArgs),
    /// Draw the tapestry preview in the terminal
    Preview(PreviewArgs),
    /// Print a share or quote-request message
    Message(MessageArgs),
    /// Send a share or quote-request message
    Send(SendArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    /// Runs the subcommand.
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Self::Designs(args) => args.execute(),
            Self::Presets(args) => args.execute(),
            Self::Quote(args) => args.execute(),
            Self::Preview(args) => args.execute(),
            Self::Message(args) => args.execute(),
            Self::Send(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}
