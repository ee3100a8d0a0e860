//! Component trait pattern for TUI popups.
//!
//! Popups own their state, handle their own input and report back to the
//! parent through events.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::ColorKey;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by popup components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User confirmed a color value for a palette slot (kept verbatim)
    ColorApplied {
        /// Slot being edited
        key: ColorKey,
        /// New value
        value: String,
    },

    /// User cancelled without making changes
    Cancelled,

    /// Component closed naturally (e.g., help overlay dismissed)
    Closed,
}
