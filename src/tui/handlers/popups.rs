//! Popup input handlers.

use anyhow::Result;
use crossterm::event;
use tracing::debug;

use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent};

/// Route input to the active popup component and apply what it reports.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(component) = state.active_component.as_mut() else {
        // Popup flag without a component: nothing to route to
        state.close_component();
        return Ok(false);
    };

    let (event, closing) = match component {
        ActiveComponent::ColorEditor(editor) => {
            let event = editor.handle_input(key);
            (event, editor.should_close())
        }
        ActiveComponent::HelpOverlay(help) => {
            let event = help.handle_input(key);
            (event, help.should_close())
        }
    };

    if let Some(event) = event {
        handle_component_event(state, event);
    }
    if closing {
        state.close_component();
    }
    Ok(false)
}

fn handle_component_event(state: &mut AppState, event: ComponentEvent) {
    match event {
        ComponentEvent::ColorApplied { key, value } => {
            debug!(key = key.as_str(), value = %value, "color applied");
            state.set_status(format!("{}: {value}", key.label()));
            state.session.set_color(key, value);
        }
        ComponentEvent::Cancelled => state.set_status("Cancelled"),
        ComponentEvent::Closed => state.set_status("Press ? for help"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::message::RecordingSink;
    use crate::models::ColorKey;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_state() -> AppState {
        AppState::with_sinks(
            Config::default(),
            Box::new(RecordingSink::default()),
            Box::new(RecordingSink::default()),
        )
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_popup_input(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_color_editor_applies_value() {
        let mut state = test_state();
        state.color_cursor = ColorKey::Sun.index();
        state.open_color_editor();

        handle_popup_input(
            &mut state,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        )
        .unwrap();
        for c in "#123456".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.session.colors().get(ColorKey::Sun), "#123456");
        assert!(state.active_popup.is_none());
        assert!(state.active_component.is_none());
    }

    #[test]
    fn test_color_editor_cancel_keeps_value() {
        let mut state = test_state();
        let before = state.session.colors().clone();
        state.open_color_editor();

        press(&mut state, KeyCode::Char('x'));
        press(&mut state, KeyCode::Esc);

        assert_eq!(state.session.colors(), &before);
        assert!(state.active_popup.is_none());
    }

    #[test]
    fn test_help_overlay_closes() {
        let mut state = test_state();
        state.open_help_overlay();
        press(&mut state, KeyCode::Down);
        assert!(state.active_popup.is_some());
        press(&mut state, KeyCode::Esc);
        assert!(state.active_popup.is_none());
    }
}
