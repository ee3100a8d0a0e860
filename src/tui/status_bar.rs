//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};
use crate::shortcuts::ShortcutRegistry;

/// Hints shown on the bottom line of the main view.
const MAX_HINTS: usize = 7;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line on top, key hints below.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// (key, hint) pairs for the current context.
    fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.active_popup {
            Some(PopupType::ColorEditor) => vec![
                ("Enter", "Apply"),
                ("Esc", "Cancel"),
                ("Tab", "Channel"),
                ("↑↓←→", "Adjust"),
            ],
            Some(PopupType::HelpOverlay) => vec![("↑↓", "Scroll"), ("Esc", "Close")],
            None => ShortcutRegistry::status_hints(MAX_HINTS),
        }
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, hint)) in Self::hints(state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(hint, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::RecordingSink;
    use crate::config::Config;

    #[test]
    fn test_main_hints_come_from_registry() {
        let state = AppState::with_sinks(
            Config::default(),
            Box::new(RecordingSink::default()),
            Box::new(RecordingSink::default()),
        );
        let hints = StatusBar::hints(&state);
        assert!(hints.contains(&("?", "Help")));
        assert!(hints.contains(&("w", "Quote")));
    }

    #[test]
    fn test_popup_hints_replace_main_hints() {
        let mut state = AppState::with_sinks(
            Config::default(),
            Box::new(RecordingSink::default()),
            Box::new(RecordingSink::default()),
        );
        state.open_help_overlay();
        let hints = StatusBar::hints(&state);
        assert!(hints.contains(&("Esc", "Close")));
        assert!(!hints.contains(&("w", "Quote")));
    }
}
