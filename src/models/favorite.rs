//! Saved palette + design snapshots.

use serde::Serialize;

use super::ColorMapping;

/// An immutable copy of a palette and design taken at a point in time.
///
/// Fields are private so a snapshot cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteSnapshot {
    id: u64,
    colors: ColorMapping,
    design: String,
    timestamp: String,
}

impl FavoriteSnapshot {
    /// Creates a snapshot. Only the session store hands out ids.
    pub(crate) fn new(id: u64, colors: ColorMapping, design: String, timestamp: String) -> Self {
        Self {
            id,
            colors,
            design,
            timestamp,
        }
    }

    /// Unique id, derived from the creation time in milliseconds.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Palette at the time of saving.
    #[must_use]
    pub const fn colors(&self) -> &ColorMapping {
        &self.colors
    }

    /// Design identifier at the time of saving.
    #[must_use]
    pub fn design(&self) -> &str {
        &self.design
    }

    /// Human-readable local timestamp.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
