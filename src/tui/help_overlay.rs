//! Help overlay widget showing all keyboard shortcuts organized by section.
//!
//! The content is generated from [`MAIN_SHORTCUTS`](crate::shortcuts::MAIN_SHORTCUTS)
//! so the overlay never drifts from the real bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};
use crate::branding::APP_DISPLAY_NAME;
use crate::shortcuts::{Section, ShortcutRegistry};

/// Width of the key column.
const KEY_COLUMN: usize = 14;

/// Keys handled inside the color editor, which has no registry of its own.
const COLOR_EDITOR_KEYS: &[(&str, &str)] = &[
    ("Type", "Enter any value, hex or free text"),
    ("Tab", "Switch between R/G/B channels"),
    ("↑/↓", "Adjust active channel by 10"),
    ("←/→", "Adjust active channel by 1"),
    ("Ctrl+U", "Clear the value"),
    ("Enter", "Apply value"),
    ("Esc", "Cancel without changes"),
];

/// Scrollable help popup.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
    closed: bool,
}

impl HelpOverlay {
    /// Creates a new help overlay scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::content(&Theme::dark()).len(),
            closed: false,
        }
    }

    /// Total number of content lines.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    fn heading(title: &str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            format!("═══ {title} ═══"),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
    }

    fn entry(keys: &str, description: &str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{keys:<KEY_COLUMN$}"), Style::default().fg(theme.success)),
            Span::styled(description.to_string(), Style::default().fg(theme.text)),
        ])
    }

    fn content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{APP_DISPLAY_NAME} - Help"),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for section in Section::ALL {
            lines.push(Self::heading(section.title(), theme));
            lines.push(Line::from(""));
            for shortcut in ShortcutRegistry::section(section) {
                lines.push(Self::entry(shortcut.keys, shortcut.description, theme));
            }
            lines.push(Line::from(""));
        }

        lines.push(Self::heading("COLOR EDITOR", theme));
        lines.push(Line::from(""));
        for (keys, description) in COLOR_EDITOR_KEYS {
            lines.push(Self::entry(keys, description, theme));
        }
        lines
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                self.closed = true;
                Some(ComponentEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::PageUp => {
                self.page_up(10);
                None
            }
            KeyCode::PageDown => {
                self.page_down(10);
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::End => {
                self.scroll_offset = self.total_lines.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help - ↑↓ scroll, Esc close ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(Self::content(theme))
            .block(block)
            .scroll((offset, 0));
        f.render_widget(paragraph, area);

        let mut scrollbar_state = ScrollbarState::new(self.total_lines).position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
