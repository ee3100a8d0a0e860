//! Theme system for consistent UI colors across dark and light modes.
//!
//! The configured [`ThemeMode`] picks a palette; `Auto` asks the OS through
//! the `dark-light` crate.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors and destructive actions
    pub error: Color,
    /// Warning state color for warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, disabled items, and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface the preview is drawn on
    pub surface: Color,
}

impl Theme {
    /// Theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Dark theme: warm amber chrome on black.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(255, 193, 7),
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Rgb(255, 152, 0),

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Light theme: amber-brown chrome on a cream background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(180, 83, 9),
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::Rgb(255, 251, 235),
            highlight_bg: Color::Rgb(254, 243, 199),
            surface: Color::Rgb(243, 244, 246),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
