//! Preset catalog: named palettes that replace the whole mapping at once.

use super::{ColorKey, ColorMapping};

/// A named, read-only palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Display name
    pub name: &'static str,
    /// Values in [`ColorKey::ALL`] order
    values: [&'static str; ColorKey::COUNT],
}

impl Preset {
    /// The preset's full mapping.
    #[must_use]
    pub fn colors(&self) -> ColorMapping {
        ColorMapping::from_values(self.values)
    }

    /// First `n` swatches, used for the compact previews in lists.
    #[must_use]
    pub fn swatches(&self, n: usize) -> &[&'static str] {
        &self.values[..n.min(ColorKey::COUNT)]
    }
}

/// The preset catalog in display order.
pub static PRESETS: [Preset; 4] = [
    Preset {
        name: "Atardecer Cálido",
        values: [
            "#FF6B35", "#F7931E", "#8B0000", "#2E7D32", "#4CAF50", "#FFF8E1", "#FFE082", "#FFCC02",
        ],
    },
    Preset {
        name: "Bosque Sereno",
        values: [
            "#FFEB3B", "#FFC107", "#3E2723", "#1B5E20", "#2E7D32", "#F1F8E9", "#C8E6C9", "#A5D6A7",
        ],
    },
    Preset {
        name: "Océano Dorado",
        values: [
            "#FFD54F", "#FF8F00", "#BF360C", "#00695C", "#00897B", "#E0F2F1", "#80CBC4", "#4DB6AC",
        ],
    },
    Preset {
        name: "Rosa Suave",
        values: [
            "#FFB74D", "#F06292", "#880E4F", "#388E3C", "#66BB6A", "#FCE4EC", "#F8BBD9", "#E1BEE7",
        ],
    },
];

/// Finds a preset by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|preset| preset.name.to_lowercase() == wanted)
}
