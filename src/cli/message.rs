//! Print or send share and quote-request messages.

use crate::cli::common::{CliError, CliResult, SessionArgs};
use crate::config::Config;
use crate::message::{dispatch, BrowserSink, ClipboardSink, MessageKind, MessageSink, OutgoingMessage};
use clap::Args;

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {}", e)))
}

fn compose(kind: MessageKind, session: &SessionArgs) -> CliResult<OutgoingMessage> {
    let config = load_config()?;
    let session = session.build_session()?;
    Ok(OutgoingMessage::compose(
        &session,
        kind,
        &config.messaging,
        &config.share.link,
    ))
}

/// Print a share or quote-request message
#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Message template
    #[arg(value_enum)]
    kind: MessageKind,

    #[command(flatten)]
    session: SessionArgs,

    /// Print the messaging deep link instead of the text
    #[arg(long)]
    url: bool,
}

impl MessageArgs {
    /// Execute message command
    pub fn execute(&self) -> CliResult<()> {
        let outgoing = compose(self.kind, &self.session)?;
        if self.url {
            println!("{}", outgoing.url);
        } else {
            println!("{}", outgoing.text);
        }
        Ok(())
    }
}

/// Hand a message to the messaging app (or the clipboard)
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Message template
    #[arg(value_enum)]
    kind: MessageKind,

    #[command(flatten)]
    session: SessionArgs,

    /// Copy the text to the clipboard instead of opening the messaging link
    #[arg(long)]
    clipboard: bool,
}

impl SendArgs {
    /// Execute send command
    pub fn execute(&self) -> CliResult<()> {
        let outgoing = compose(self.kind, &self.session)?;

        let mut sink: Box<dyn MessageSink> = if self.clipboard {
            Box::new(ClipboardSink)
        } else {
            Box::new(BrowserSink)
        };

        dispatch(sink.as_mut(), &outgoing).map_err(|e| {
            CliError::dispatch(format!(
                "Failed to send {} via {}: {:#}",
                self.kind.label(),
                sink.name(),
                e
            ))
        })?;

        println!("Handed {} to {}.", self.kind.label(), sink.name());
        Ok(())
    }
}
