//! Session state store.
//!
//! Holds everything the user can change during a run: the palette, the
//! selected design, saved favorites and the preview flag. Nothing here is
//! persisted. Quote and preview are re-derived from the whole state on demand.

// Millisecond timestamps after 1970 are positive.
#![allow(clippy::cast_sign_loss)]

use chrono::{DateTime, Local};
use tracing::debug;

use crate::models::{ColorKey, ColorMapping, Design, DesignOption, FavoriteSnapshot, Preset, QuoteBreakdown};
use crate::preview::{render_preview, TapestryPreview};

/// Format used for favorite timestamps (day/month/year, 24h clock).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Source of the current time, injectable for tests.
pub type Clock = fn() -> DateTime<Local>;

/// The in-memory state of one design session.
#[derive(Debug, Clone)]
pub struct DesignSession {
    colors: ColorMapping,
    selected_design: String,
    favorites: Vec<FavoriteSnapshot>,
    show_preview: bool,
    clock: Clock,
}

impl DesignSession {
    /// Creates a session with the default palette and design.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Local::now)
    }

    /// Creates a session that stamps favorites with `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            colors: ColorMapping::default(),
            selected_design: Design::DEFAULT.id().to_string(),
            favorites: Vec::new(),
            show_preview: false,
            clock,
        }
    }

    /// Current palette.
    #[must_use]
    pub const fn colors(&self) -> &ColorMapping {
        &self.colors
    }

    /// Currently selected design identifier (may be outside the catalog).
    #[must_use]
    pub fn selected_design(&self) -> &str {
        &self.selected_design
    }

    /// Catalog entry for the selection, if it is a known design.
    #[must_use]
    pub fn design(&self) -> Option<&'static DesignOption> {
        crate::models::find_design(&self.selected_design)
    }

    /// Saved favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[FavoriteSnapshot] {
        &self.favorites
    }

    /// Preview visibility flag.
    #[must_use]
    pub const fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Replaces a single palette slot. The value is not validated.
    pub fn set_color(&mut self, key: ColorKey, value: impl Into<String>) {
        let value = value.into();
        debug!(key = key.as_str(), value = %value, "color changed");
        self.colors.set(key, value);
    }

    /// Replaces the whole palette with the preset's.
    pub fn apply_preset(&mut self, preset: &Preset) {
        debug!(preset = preset.name, "preset applied");
        self.colors = preset.colors();
    }

    /// Replaces the selection. Unknown identifiers are accepted.
    pub fn select_design(&mut self, id: impl Into<String>) {
        self.selected_design = id.into();
        debug!(design = %self.selected_design, known = self.design().is_some(), "design selected");
    }

    /// Saves the current palette and design as a new favorite.
    pub fn add_favorite(&mut self) -> &FavoriteSnapshot {
        let now = (self.clock)();
        let millis = now.timestamp_millis().max(0) as u64;
        // Ids stay unique even when two favorites land in the same millisecond.
        let id = match self.favorites.last() {
            Some(last) if last.id() >= millis => last.id() + 1,
            _ => millis,
        };

        let snapshot = FavoriteSnapshot::new(
            id,
            self.colors.clone(),
            self.selected_design.clone(),
            now.format(TIMESTAMP_FORMAT).to_string(),
        );
        debug!(id, design = %self.selected_design, total = self.favorites.len() + 1, "favorite added");
        self.favorites.push(snapshot);
        &self.favorites[self.favorites.len() - 1]
    }

    /// Flips the preview flag and returns the new value.
    pub fn toggle_preview_visibility(&mut self) -> bool {
        self.show_preview = !self.show_preview;
        self.show_preview
    }

    /// Quote for the current selection.
    #[must_use]
    pub fn quote(&self) -> QuoteBreakdown {
        QuoteBreakdown::for_design(&self.selected_design)
    }

    /// Preview for the current state; `None` for unknown designs.
    #[must_use]
    pub fn preview(&self) -> Option<TapestryPreview> {
        render_preview(&self.colors, &self.selected_design)
    }
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new()
    }
}
