// Navigation action handlers

use crate::models::{ColorKey, Design, PRESETS};
use crate::tui::{AppState, Focus};
use anyhow::Result;

/// Moves `cursor` by `delta` inside `0..len`, stopping at the ends.
const fn step(cursor: usize, len: usize, delta: isize) -> usize {
    if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        let next = cursor + delta.unsigned_abs();
        if next >= len {
            len.saturating_sub(1)
        } else {
            next
        }
    }
}

/// Moves the cursor of the focused panel.
fn move_cursor(state: &mut AppState, delta: isize) {
    match state.focus {
        Focus::Designs => {
            state.design_cursor = step(state.design_cursor, Design::ALL.len(), delta);
        }
        Focus::Presets => {
            state.preset_cursor = step(state.preset_cursor, PRESETS.len(), delta);
        }
        Focus::Colors => {
            state.color_cursor = step(state.color_cursor, ColorKey::COUNT, delta);
        }
    }
}

/// Handle focus next action
pub fn handle_focus_next(state: &mut AppState) -> Result<bool> {
    state.focus = state.focus.next();
    Ok(false)
}

/// Handle focus previous action
pub fn handle_focus_previous(state: &mut AppState) -> Result<bool> {
    state.focus = state.focus.previous();
    Ok(false)
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    move_cursor(state, -1);
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    move_cursor(state, 1);
    Ok(false)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    move_cursor(state, -1);
    Ok(false)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    move_cursor(state, 1);
    Ok(false)
}
