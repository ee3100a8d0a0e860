// Session action handlers

use crate::models::{Design, PRESETS};
use crate::tui::{AppState, Focus};
use anyhow::Result;
use tracing::debug;

use super::popups;

/// Handle activate action: what Enter does depends on the focused panel
pub fn handle_activate(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Designs => {
            if let Some(design) = Design::ALL.get(state.design_cursor) {
                state.session.select_design(design.id());
                state.set_status(format!("Design: {}", design.option().name));
            }
            Ok(false)
        }
        Focus::Presets => {
            if let Some(preset) = PRESETS.get(state.preset_cursor) {
                state.session.apply_preset(preset);
                state.set_status(format!("Applied palette: {}", preset.name));
            }
            Ok(false)
        }
        Focus::Colors => popups::handle_open_color_editor(state),
    }
}

/// Handle add favorite action
pub fn handle_add_favorite(state: &mut AppState) -> Result<bool> {
    let id = state.session.add_favorite().id();
    let count = state.session.favorites().len();
    debug!(id, count, "favorite added");
    state.set_status(format!("Saved to favorites ({count})"));
    Ok(false)
}

/// Handle toggle preview action
pub fn handle_toggle_preview(state: &mut AppState) -> Result<bool> {
    let shown = state.session.toggle_preview_visibility();
    state.set_status(if shown {
        "Preview flag on"
    } else {
        "Preview flag off"
    });
    Ok(false)
}
