//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod color_editor;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod panels;
pub mod preview_widget;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::branding::APP_DISPLAY_NAME;
use crate::config::Config;
use crate::message::{BrowserSink, ClipboardSink, MessageSink};
use crate::models::{design_name, ColorKey, Design, PRESETS};
use crate::session::DesignSession;

// Re-export TUI components
pub use color_editor::ColorEditor;
pub use component::{Component, ComponentEvent};
pub use help_overlay::HelpOverlay;
pub use preview_widget::PreviewWidget;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Panel that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Design selector
    Designs,
    /// Preset palettes
    Presets,
    /// Per-slot color list
    Colors,
}

impl Focus {
    /// Panel after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Designs => Self::Presets,
            Self::Presets => Self::Colors,
            Self::Colors => Self::Designs,
        }
    }

    /// Panel before this one, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Designs => Self::Colors,
            Self::Presets => Self::Designs,
            Self::Colors => Self::Presets,
        }
    }
}

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Color editor for one palette slot
    ColorEditor,
    /// Help overlay popup
    HelpOverlay,
}

/// The component backing the active popup.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Color editor component
    ColorEditor(ColorEditor),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Palette, design, favorites and preview flag
    pub session: DesignSession,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Focused panel
    pub focus: Focus,
    /// Highlighted design card
    pub design_cursor: usize,
    /// Highlighted preset
    pub preset_cursor: usize,
    /// Highlighted color slot
    pub color_cursor: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Message sinks
    /// Opens messaging deep links
    pub browser: Box<dyn MessageSink>,
    /// Receives copied message text
    pub clipboard: Box<dyn MessageSink>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the editor state with the system browser and clipboard.
    ///
    /// Opens the help overlay when the config asks for it.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let show_help = config.ui.show_help_on_startup;
        let mut state = Self::with_sinks(config, Box::new(BrowserSink), Box::new(ClipboardSink));
        if show_help {
            state.open_help_overlay();
        }
        state
    }

    /// Creates the editor state with explicit message sinks.
    #[must_use]
    pub fn with_sinks(
        config: Config,
        browser: Box<dyn MessageSink>,
        clipboard: Box<dyn MessageSink>,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let session = DesignSession::new();
        let design_cursor = Design::from_id(session.selected_design())
            .and_then(|design| Design::ALL.iter().position(|d| *d == design))
            .unwrap_or(0);

        Self {
            session,
            config,
            theme,
            focus: Focus::Designs,
            design_cursor,
            preset_cursor: 0,
            color_cursor: 0,
            active_popup: None,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            browser,
            clipboard,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show an error overlay; it blocks input until dismissed.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Slot under the color cursor.
    #[must_use]
    pub fn selected_color_key(&self) -> ColorKey {
        ColorKey::ALL[self.color_cursor.min(ColorKey::COUNT - 1)]
    }

    /// Open the color editor on the highlighted slot.
    pub fn open_color_editor(&mut self) {
        let key = self.selected_color_key();
        let editor = ColorEditor::new(key, self.session.colors().get(key));
        debug!(key = key.as_str(), "opening color editor");
        self.active_component = Some(ActiveComponent::ColorEditor(editor));
        self.active_popup = Some(PopupType::ColorEditor);
    }

    /// Open the help overlay.
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close whatever popup is open.
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
///
/// # Errors
///
/// Returns error if terminal setup fails
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal mode
///
/// # Errors
///
/// Returns error if terminal restoration fails
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main TUI event loop
///
/// # Errors
///
/// Returns error if terminal drawing or event reading fails
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout; resize simply re-renders
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the full UI
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(component) = &state.active_component {
        render_popup(f, component, &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with app name, design and total
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " {} - {} - Total ${}",
        APP_DISPLAY_NAME,
        design_name(state.session.selected_design()),
        state.session.quote().total
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Left column of controls, right column of results
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // The preset list always shows every preset
    let preset_rows = PRESETS.len() as u16;
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // Designs
            Constraint::Length(2 + preset_rows), // Presets
            Constraint::Min(10),                 // Colors
        ])
        .split(columns[0]);

    panels::render_designs(f, left[0], state);
    panels::render_presets(f, left[1], state);
    panels::render_colors(f, left[2], state);

    let favorites_height = if state.session.favorites().is_empty() {
        0
    } else {
        2 + state.session.favorites().len().min(panels::FAVORITES_SHOWN) as u16
    };
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),                  // Preview
            Constraint::Length(11),              // Quote
            Constraint::Length(favorites_height), // Favorites
        ])
        .split(columns[1]);

    PreviewWidget::render(f, right[0], state);
    panels::render_quote(f, right[1], state);
    if favorites_height > 0 {
        panels::render_favorites(f, right[2], state);
    }
}

/// Render the active popup component
fn render_popup(f: &mut Frame, component: &ActiveComponent, theme: &Theme) {
    let area = f.area();
    match component {
        ActiveComponent::ColorEditor(editor) => editor.render(f, area, theme),
        ActiveComponent::HelpOverlay(help) => help.render(f, area, theme),
    }
}

/// Render error overlay
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::RecordingSink;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn test_state() -> AppState {
        AppState::with_sinks(
            Config::default(),
            Box::new(RecordingSink::default()),
            Box::new(RecordingSink::default()),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::Designs;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Designs);
        assert_eq!(Focus::Designs.previous(), Focus::Colors);
    }

    #[test]
    fn test_initial_cursor_on_default_design() {
        let state = test_state();
        assert_eq!(Design::ALL[state.design_cursor], Design::DEFAULT);
        assert!(state.active_popup.is_none());
    }

    #[test]
    fn test_new_opens_help_when_configured() {
        let mut config = Config::default();
        config.ui.show_help_on_startup = true;
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        let state = AppState::new(config);
        assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));
    }

    #[test]
    fn test_error_blocks_input_until_dismissed() {
        let mut state = test_state();
        state.set_error("boom");

        assert!(!handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(!state.should_quit);
        assert!(state.error_message.is_some());

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.error_message.is_none());
    }

    fn rendered_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_main_view() {
        let mut state = test_state();
        let text = rendered_text(&state);
        assert!(text.contains("Elige tu dise"));
        assert!(text.contains("Cotizaci"));
        assert!(!text.contains("Favoritos"));

        state.session.add_favorite();
        assert!(rendered_text(&state).contains("Favoritos (1)"));
    }

    #[test]
    fn test_render_overlays() {
        let mut state = test_state();
        state.open_color_editor();
        assert!(rendered_text(&state).contains("Editar color"));

        state.set_error("sink failed");
        let text = rendered_text(&state);
        assert!(text.contains("ERROR"));
        assert!(text.contains("sink failed"));
    }

    #[test]
    fn test_render_small_terminal() {
        let state = test_state();
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }

    #[test]
    fn test_centered_rect_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, parent);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
    }
}
