//! Action dispatch for the main view.

use anyhow::Result;
use tracing::debug;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{messages, navigation, popups, session};

/// Dispatch an action to the appropriate handler.
///
/// Returns `Ok(true)` when the application should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!(action = action.id(), "dispatch");

    match action {
        // Focus & navigation
        Action::FocusNext => navigation::handle_focus_next(state),
        Action::FocusPrevious => navigation::handle_focus_previous(state),
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),

        // Session
        Action::Activate => session::handle_activate(state),
        Action::AddFavorite => session::handle_add_favorite(state),
        Action::TogglePreview => session::handle_toggle_preview(state),

        // Messages
        Action::RequestQuote => messages::handle_request_quote(state),
        Action::ShareDesign => messages::handle_share_design(state),
        Action::CopyQuoteRequest => messages::handle_copy_quote_request(state),

        // General
        Action::ToggleHelp => popups::handle_toggle_help(state),
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        Action::Cancel => {
            state.set_status("");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::message::{MessageKind, MessageSink, OutgoingMessage, RecordingSink};
    use crate::models::{ColorKey, Design, PRESETS};
    use crate::tui::{Focus, PopupType};
    use anyhow::bail;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink whose deliveries stay visible after it is boxed into the state.
    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<OutgoingMessage>>>);

    impl MessageSink for SharedSink {
        fn name(&self) -> &'static str {
            "shared"
        }

        fn deliver(&mut self, message: &OutgoingMessage) -> Result<()> {
            self.0.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl MessageSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn deliver(&mut self, _message: &OutgoingMessage) -> Result<()> {
            bail!("no handler for wa.me links")
        }
    }

    fn state_with(browser: SharedSink, clipboard: SharedSink) -> AppState {
        AppState::with_sinks(Config::default(), Box::new(browser), Box::new(clipboard))
    }

    fn test_state() -> AppState {
        AppState::with_sinks(
            Config::default(),
            Box::new(RecordingSink::default()),
            Box::new(RecordingSink::default()),
        )
    }

    #[test]
    fn test_quit() {
        let mut state = test_state();
        assert!(dispatch_action(&mut state, Action::Quit).unwrap());
        assert!(state.should_quit);
    }

    #[test]
    fn test_activate_selects_design() {
        let mut state = test_state();
        dispatch_action(&mut state, Action::NavigateRight).unwrap();
        dispatch_action(&mut state, Action::NavigateRight).unwrap();
        dispatch_action(&mut state, Action::Activate).unwrap();

        assert_eq!(state.session.selected_design(), Design::ALL[2].id());
        assert_eq!(state.session.quote().total, 200);
    }

    #[test]
    fn test_activate_applies_preset() {
        let mut state = test_state();
        dispatch_action(&mut state, Action::FocusNext).unwrap();
        assert_eq!(state.focus, Focus::Presets);
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        dispatch_action(&mut state, Action::Activate).unwrap();

        assert_eq!(state.session.colors(), &PRESETS[1].colors());
    }

    #[test]
    fn test_activate_on_colors_opens_editor() {
        let mut state = test_state();
        dispatch_action(&mut state, Action::FocusPrevious).unwrap();
        assert_eq!(state.focus, Focus::Colors);
        for _ in 0..20 {
            dispatch_action(&mut state, Action::NavigateDown).unwrap();
        }
        assert_eq!(state.selected_color_key(), ColorKey::Fringe);

        dispatch_action(&mut state, Action::Activate).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::ColorEditor));
    }

    #[test]
    fn test_add_favorite_and_toggle_preview() {
        let mut state = test_state();
        dispatch_action(&mut state, Action::AddFavorite).unwrap();
        dispatch_action(&mut state, Action::AddFavorite).unwrap();
        assert_eq!(state.session.favorites().len(), 2);

        assert!(!state.session.show_preview());
        dispatch_action(&mut state, Action::TogglePreview).unwrap();
        assert!(state.session.show_preview());
        dispatch_action(&mut state, Action::TogglePreview).unwrap();
        assert!(!state.session.show_preview());
    }

    #[test]
    fn test_request_quote_goes_to_browser() {
        let browser = SharedSink::default();
        let clipboard = SharedSink::default();
        let mut state = state_with(browser.clone(), clipboard.clone());

        dispatch_action(&mut state, Action::RequestQuote).unwrap();

        let sent = browser.0.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, MessageKind::Quote);
        assert!(sent[0].url.starts_with("https://wa.me/"));
        assert!(clipboard.0.borrow().is_empty());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_share_uses_configured_link() {
        let browser = SharedSink::default();
        let mut state = state_with(browser.clone(), SharedSink::default());
        state.config.share.link = "https://example.com/tapiz".to_string();

        dispatch_action(&mut state, Action::ShareDesign).unwrap();

        let sent = browser.0.borrow();
        assert_eq!(sent[0].kind, MessageKind::Share);
        assert!(sent[0].text.ends_with("https://example.com/tapiz"));
    }

    #[test]
    fn test_copy_goes_to_clipboard() {
        let clipboard = SharedSink::default();
        let mut state = state_with(SharedSink::default(), clipboard.clone());

        dispatch_action(&mut state, Action::CopyQuoteRequest).unwrap();
        assert_eq!(clipboard.0.borrow().len(), 1);
    }

    #[test]
    fn test_sink_failure_is_reported_not_fatal() {
        let mut state = AppState::with_sinks(
            Config::default(),
            Box::new(FailingSink),
            Box::new(FailingSink),
        );
        state.session.add_favorite();

        let quit = dispatch_action(&mut state, Action::ShareDesign).unwrap();

        assert!(!quit);
        let error = state.error_message.as_deref().unwrap_or_default();
        assert!(error.contains("no handler"));
        assert_eq!(state.session.favorites().len(), 1);
    }
}
