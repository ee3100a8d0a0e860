//! Design catalog: the selectable tapestry templates.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fallback name used in messages when the selection is not in the catalog.
pub const CUSTOM_DESIGN_NAME: &str = "Diseño personalizado";

/// The closed set of known tapestry templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Design {
    /// Classic sunflowers with sun, stems and striped background
    Sunflowers,
    /// Romantic roses
    Roses,
    /// Modern abstract shapes
    Abstract,
    /// Geometric shapes
    Geometric,
}

impl Design {
    /// All designs in catalog order.
    pub const ALL: [Self; 4] = [Self::Sunflowers, Self::Roses, Self::Abstract, Self::Geometric];

    /// Design selected when a session starts.
    pub const DEFAULT: Self = Self::Sunflowers;

    /// Identifier used in selection state, CLI arguments and favorites.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sunflowers => "sunflowers",
            Self::Roses => "roses",
            Self::Abstract => "abstract",
            Self::Geometric => "geometric",
        }
    }

    /// Looks up a design by identifier (exact match).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|design| design.id() == id)
    }

    /// Premium designs carry a 20% surcharge on the base price.
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        matches!(self, Self::Abstract | Self::Geometric)
    }

    /// Catalog entry for this design.
    #[must_use]
    pub fn option(&self) -> &'static DesignOption {
        &DESIGN_OPTIONS[*self as usize]
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Design {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl FromStr for Design {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| {
            let ids: Vec<&str> = Self::ALL.iter().map(Design::id).collect();
            anyhow::anyhow!("Unknown design '{s}'. Available: {}", ids.join(", "))
        })
    }
}

/// Read-only catalog entry describing a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignOption {
    /// Design identifier
    pub id: Design,
    /// Display name
    pub name: &'static str,
    /// Icon glyph
    pub icon: &'static str,
}

/// The design catalog, indexed in [`Design::ALL`] order.
pub static DESIGN_OPTIONS: [DesignOption; 4] = [
    DesignOption {
        id: Design::Sunflowers,
        name: "Girasoles Clásicos",
        icon: "🌻",
    },
    DesignOption {
        id: Design::Roses,
        name: "Rosas Románticas",
        icon: "🌹",
    },
    DesignOption {
        id: Design::Abstract,
        name: "Abstracto Moderno",
        icon: "🎨",
    },
    DesignOption {
        id: Design::Geometric,
        name: "Geométrico",
        icon: "🔶",
    },
];

/// Finds a catalog entry by identifier.
#[must_use]
pub fn find_design(id: &str) -> Option<&'static DesignOption> {
    Design::from_id(id).map(|design| design.option())
}

/// Display name for any selection, falling back to [`CUSTOM_DESIGN_NAME`].
#[must_use]
pub fn design_name(id: &str) -> &'static str {
    find_design(id).map_or(CUSTOM_DESIGN_NAME, |option| option.name)
}
