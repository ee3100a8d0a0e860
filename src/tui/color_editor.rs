//! Color editor popup for a single palette slot.
//!
//! The value is free text, typed directly. When the text parses as a hex
//! color the RGB channels can also be nudged, which rewrites the text.

// Allow intentional type casts for gauge percentages
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};
use crate::models::{ColorKey, RgbColor};

/// Longest value accepted from the keyboard.
const MAX_INPUT_LEN: usize = 32;

/// RGB channel being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red color channel
    Red,
    /// Green color channel
    Green,
    /// Blue color channel
    Blue,
}

impl RgbChannel {
    const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Blue => Self::Green,
        }
    }
}

/// Popup editing one palette slot.
#[derive(Debug, Clone)]
pub struct ColorEditor {
    key: ColorKey,
    original: String,
    input: String,
    active_channel: RgbChannel,
    closed: bool,
}

impl ColorEditor {
    /// Opens the editor on `key` with its current value.
    #[must_use]
    pub fn new(key: ColorKey, current: &str) -> Self {
        Self {
            key,
            original: current.to_string(),
            input: current.to_string(),
            active_channel: RgbChannel::Red,
            closed: false,
        }
    }

    /// Text as currently typed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Channel nudged by the arrow keys.
    #[must_use]
    pub const fn active_channel(&self) -> RgbChannel {
        self.active_channel
    }

    /// The typed text as a color, if it parses.
    #[must_use]
    pub fn color(&self) -> Option<RgbColor> {
        RgbColor::parse_lenient(&self.input)
    }

    /// Adds `delta` to the active channel, saturating. Unparseable text
    /// starts from the original value, or black.
    pub fn nudge(&mut self, delta: i16) {
        let mut color = self
            .color()
            .or_else(|| RgbColor::parse_lenient(&self.original))
            .unwrap_or(RgbColor::new(0, 0, 0));
        let channel = match self.active_channel {
            RgbChannel::Red => &mut color.r,
            RgbChannel::Green => &mut color.g,
            RgbChannel::Blue => &mut color.b,
        };
        *channel = (i16::from(*channel) + delta).clamp(0, 255) as u8;
        self.input = color.to_hex();
    }

    fn finish(&mut self, event: ComponentEvent) -> Option<ComponentEvent> {
        self.closed = true;
        Some(event)
    }
}

impl Component for ColorEditor {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => self.finish(ComponentEvent::Cancelled),
            KeyCode::Enter => self.finish(ComponentEvent::ColorApplied {
                key: self.key,
                value: self.input.clone(),
            }),
            KeyCode::Tab => {
                self.active_channel = self.active_channel.next();
                None
            }
            KeyCode::BackTab => {
                self.active_channel = self.active_channel.previous();
                None
            }
            KeyCode::Up => {
                self.nudge(10);
                None
            }
            KeyCode::Down => {
                self.nudge(-10);
                None
            }
            KeyCode::Right => {
                self.nudge(1);
                None
            }
            KeyCode::Left => {
                self.nudge(-1);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                None
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.input.chars().count() < MAX_INPUT_LEN =>
            {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 70, area);

        f.render_widget(Clear, area);
        let block = Block::default()
            .title(format!(" Editar color: {} ", self.key.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Text input
                Constraint::Length(1), // Red
                Constraint::Length(1), // Green
                Constraint::Length(1), // Blue
                Constraint::Length(1), // Spacer
                Constraint::Min(3),    // Swatch
                Constraint::Length(2), // Instructions
            ])
            .split(inner);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Valor ")
                    .border_style(Style::default().fg(theme.accent)),
            );
        f.render_widget(input, chunks[0]);

        let parsed = self.color();
        let channels = [
            (RgbChannel::Red, "R", parsed.map(|c| c.r), Color::Red),
            (RgbChannel::Green, "G", parsed.map(|c| c.g), Color::Green),
            (RgbChannel::Blue, "B", parsed.map(|c| c.b), Color::Blue),
        ];
        for (i, (channel, label, value, color)) in channels.into_iter().enumerate() {
            render_channel_gauge(
                f,
                chunks[1 + i],
                label,
                value,
                color,
                channel == self.active_channel,
                theme,
            );
        }

        let swatch = match parsed {
            Some(color) => Paragraph::new(self.input.clone()).style(
                Style::default()
                    .bg(color.to_ratatui_color())
                    .fg(color.contrast_text().to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ),
            None => Paragraph::new("Valor libre: se guarda tal cual, sin vista de color")
                .style(Style::default().fg(theme.warning)),
        };
        f.render_widget(
            swatch.block(Block::default().borders(Borders::ALL).title(" Muestra ")),
            chunks[5],
        );

        let key_style = Style::default().fg(theme.accent);
        let instructions = Paragraph::new(vec![Line::from(vec![
            Span::styled("↑↓", key_style),
            Span::raw(" ±10  "),
            Span::styled("←→", key_style),
            Span::raw(" ±1  "),
            Span::styled("Tab", key_style),
            Span::raw(" Canal  "),
            Span::styled("Ctrl+U", key_style),
            Span::raw(" Borrar  "),
            Span::styled("Enter", key_style),
            Span::raw(" Aplicar  "),
            Span::styled("Esc", key_style),
            Span::raw(" Cancelar"),
        ])])
        .style(Style::default().fg(theme.text_secondary));
        f.render_widget(instructions, chunks[6]);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

/// Render a single channel gauge; dimmed when the text is not a color.
fn render_channel_gauge(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<u8>,
    color: Color,
    is_active: bool,
    theme: &Theme,
) {
    let Some(value) = value else {
        let text = Paragraph::new(format!("{label}: ---")).style(Style::default().fg(theme.text_muted));
        f.render_widget(text, area);
        return;
    };

    let percentage = (f64::from(value) / 255.0 * 100.0) as u16;
    let style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let gauge = Gauge::default()
        .gauge_style(style)
        .label(format!("{label}: {value:3}"))
        .percent(percentage);
    f.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_replaces_value() {
        let mut editor = ColorEditor::new(ColorKey::Sun, "#FFD700");
        editor.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        for c in "#00ff00".chars() {
            editor.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(editor.input(), "#00ff00");

        let event = editor.handle_input(key(KeyCode::Enter));
        assert_eq!(
            event,
            Some(ComponentEvent::ColorApplied {
                key: ColorKey::Sun,
                value: "#00ff00".to_string()
            })
        );
        assert!(editor.should_close());
    }

    #[test]
    fn test_free_text_is_applied_verbatim() {
        let mut editor = ColorEditor::new(ColorKey::Fringe, "");
        for c in "terracota".chars() {
            editor.handle_input(key(KeyCode::Char(c)));
        }
        assert!(editor.color().is_none());
        assert_eq!(
            editor.handle_input(key(KeyCode::Enter)),
            Some(ComponentEvent::ColorApplied {
                key: ColorKey::Fringe,
                value: "terracota".to_string()
            })
        );
    }

    #[test]
    fn test_nudge_channels() {
        let mut editor = ColorEditor::new(ColorKey::Leaves, "#000000");
        editor.handle_input(key(KeyCode::Up));
        assert_eq!(editor.input(), "#0A0000");

        editor.handle_input(key(KeyCode::Tab));
        assert_eq!(editor.active_channel(), RgbChannel::Green);
        editor.handle_input(key(KeyCode::Right));
        assert_eq!(editor.input(), "#0A0100");

        editor.handle_input(key(KeyCode::BackTab));
        editor.handle_input(key(KeyCode::Down));
        editor.handle_input(key(KeyCode::Down));
        assert_eq!(editor.input(), "#000100");
    }

    #[test]
    fn test_nudge_saturates() {
        let mut editor = ColorEditor::new(ColorKey::Sun, "#FA0000");
        editor.handle_input(key(KeyCode::Up));
        assert_eq!(editor.input(), "#FF0000");
    }

    #[test]
    fn test_nudge_from_unparseable_uses_original() {
        let mut editor = ColorEditor::new(ColorKey::Sun, "#102030");
        editor.handle_input(key(KeyCode::Backspace));
        assert!(editor.color().is_none());
        editor.handle_input(key(KeyCode::Right));
        assert_eq!(editor.input(), "#112030");
    }

    #[test]
    fn test_escape_cancels() {
        let mut editor = ColorEditor::new(ColorKey::Sun, "#FFD700");
        editor.handle_input(key(KeyCode::Char('x')));
        assert_eq!(
            editor.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Cancelled)
        );
        assert!(editor.should_close());
    }
}
