// Popup management action handlers

use crate::tui::{AppState, PopupType};
use anyhow::Result;

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.active_popup == Some(PopupType::HelpOverlay) {
        state.close_component();
    } else {
        state.open_help_overlay();
    }
    Ok(false)
}

/// Handle open color editor action
pub fn handle_open_color_editor(state: &mut AppState) -> Result<bool> {
    state.open_color_editor();
    state.set_status(format!(
        "Editing {} - Enter: apply, Esc: cancel",
        state.selected_color_key().label()
    ));
    Ok(false)
}
