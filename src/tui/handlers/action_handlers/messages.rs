// Message hand-off action handlers

use crate::message::{dispatch, MessageKind, OutgoingMessage};
use crate::tui::AppState;
use anyhow::Result;

/// Where a composed message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Browser,
    Clipboard,
}

/// Composes `kind` for the current session and hands it to `target`.
///
/// Failures land in the error overlay; the session is never touched.
fn send(state: &mut AppState, kind: MessageKind, target: Target) {
    let message = OutgoingMessage::compose(
        &state.session,
        kind,
        &state.config.messaging,
        &state.config.share.link,
    );
    let sink = match target {
        Target::Browser => state.browser.as_mut(),
        Target::Clipboard => state.clipboard.as_mut(),
    };

    match dispatch(sink, &message) {
        Ok(()) => match target {
            Target::Browser => state.set_status(format!("Opened {} message", kind.label())),
            Target::Clipboard => state.set_status(format!("Copied {} message", kind.label())),
        },
        Err(e) => state.set_error(format!("Could not send {} message: {e:#}", kind.label())),
    }
}

/// Handle request quote action
pub fn handle_request_quote(state: &mut AppState) -> Result<bool> {
    send(state, MessageKind::Quote, Target::Browser);
    Ok(false)
}

/// Handle share design action
pub fn handle_share_design(state: &mut AppState) -> Result<bool> {
    send(state, MessageKind::Share, Target::Browser);
    Ok(false)
}

/// Handle copy quote request action
pub fn handle_copy_quote_request(state: &mut AppState) -> Result<bool> {
    send(state, MessageKind::Quote, Target::Clipboard);
    Ok(false)
}
