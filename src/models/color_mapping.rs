//! The fixed set of named color slots that make up a tapestry palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight color slots of a tapestry.
///
/// The set is closed: every [`ColorMapping`] holds exactly one value per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorKey {
    /// The sun (or the leading shape in the non-floral designs)
    Sun,
    /// Sunflower petals
    SunflowerPetals,
    /// Sunflower centers
    SunflowerCenter,
    /// Flower stems
    Stems,
    /// Leaves
    Leaves,
    /// First background layer
    Background1,
    /// Second background layer
    Background2,
    /// Fringe, border and hanging cord
    Fringe,
}

impl ColorKey {
    /// Number of slots.
    pub const COUNT: usize = 8;

    /// All keys in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Sun,
        Self::SunflowerPetals,
        Self::SunflowerCenter,
        Self::Stems,
        Self::Leaves,
        Self::Background1,
        Self::Background2,
        Self::Fringe,
    ];

    /// Wire name used in messages, JSON and `--set key=value` arguments.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::SunflowerPetals => "sunflowerPetals",
            Self::SunflowerCenter => "sunflowerCenter",
            Self::Stems => "stems",
            Self::Leaves => "leaves",
            Self::Background1 => "background1",
            Self::Background2 => "background2",
            Self::Fringe => "fringe",
        }
    }

    /// Human label: the camelCase wire name split into lowercase words.
    ///
    /// ```
    /// use tapiz_designer::models::ColorKey;
    ///
    /// assert_eq!(ColorKey::SunflowerPetals.label(), "sunflower petals");
    /// assert_eq!(ColorKey::Background1.label(), "background1");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = String::new();
        for ch in self.as_str().chars() {
            if ch.is_ascii_uppercase() {
                label.push(' ');
                label.push(ch.to_ascii_lowercase());
            } else {
                label.push(ch);
            }
        }
        label
    }

    /// Position of this key in [`ColorKey::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(ColorKey::as_str).collect();
                anyhow::anyhow!(
                    "Unknown color key '{trimmed}'. Valid keys: {}",
                    valid.join(", ")
                )
            })
    }
}

/// Color value for every slot.
///
/// Values are free text; they normally hold `#RRGGBB` but nothing enforces it.
/// Serializes as a JSON/TOML map keyed by the wire names, in key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMapping {
    /// The sun
    pub sun: String,
    /// Sunflower petals
    pub sunflower_petals: String,
    /// Sunflower centers
    pub sunflower_center: String,
    /// Flower stems
    pub stems: String,
    /// Leaves
    pub leaves: String,
    /// First background layer
    pub background1: String,
    /// Second background layer
    pub background2: String,
    /// Fringe
    pub fringe: String,
}

impl ColorMapping {
    /// Builds a mapping from values listed in [`ColorKey::ALL`] order.
    #[must_use]
    pub fn from_values(values: [&str; ColorKey::COUNT]) -> Self {
        let [sun, sunflower_petals, sunflower_center, stems, leaves, background1, background2, fringe] =
            values;
        Self {
            sun: sun.to_string(),
            sunflower_petals: sunflower_petals.to_string(),
            sunflower_center: sunflower_center.to_string(),
            stems: stems.to_string(),
            leaves: leaves.to_string(),
            background1: background1.to_string(),
            background2: background2.to_string(),
            fringe: fringe.to_string(),
        }
    }

    /// Value stored at `key`.
    #[must_use]
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Sun => &self.sun,
            ColorKey::SunflowerPetals => &self.sunflower_petals,
            ColorKey::SunflowerCenter => &self.sunflower_center,
            ColorKey::Stems => &self.stems,
            ColorKey::Leaves => &self.leaves,
            ColorKey::Background1 => &self.background1,
            ColorKey::Background2 => &self.background2,
            ColorKey::Fringe => &self.fringe,
        }
    }

    /// Replaces the value at `key`. The value is not validated.
    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let slot = match key {
            ColorKey::Sun => &mut self.sun,
            ColorKey::SunflowerPetals => &mut self.sunflower_petals,
            ColorKey::SunflowerCenter => &mut self.sunflower_center,
            ColorKey::Stems => &mut self.stems,
            ColorKey::Leaves => &mut self.leaves,
            ColorKey::Background1 => &mut self.background1,
            ColorKey::Background2 => &mut self.background2,
            ColorKey::Fringe => &mut self.fringe,
        };
        *slot = value.into();
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &str)> + '_ {
        ColorKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Number of entries; always [`ColorKey::COUNT`].
    #[must_use]
    pub const fn len(&self) -> usize {
        ColorKey::COUNT
    }

    /// A mapping is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ColorMapping {
    fn default() -> Self {
        Self::from_values([
            "#FFD700", "#FFA500", "#8B0000", "#228B22", "#32CD32", "#F5F5DC", "#DEB887", "#D2B48C",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_matches_index() {
        for (i, key) in ColorKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_key_parse_and_print_agree() {
        for key in ColorKey::ALL {
            assert_eq!(key.as_str().parse::<ColorKey>().unwrap(), key);
        }
        assert_eq!("SUNFLOWERPETALS".parse::<ColorKey>().unwrap(), ColorKey::SunflowerPetals);
        assert!("petals".parse::<ColorKey>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColorKey::Sun.label(), "sun");
        assert_eq!(ColorKey::SunflowerCenter.label(), "sunflower center");
        assert_eq!(ColorKey::Background2.label(), "background2");
    }

    #[test]
    fn test_default_values() {
        let colors = ColorMapping::default();
        assert_eq!(colors.get(ColorKey::Sun), "#FFD700");
        assert_eq!(colors.get(ColorKey::Fringe), "#D2B48C");
        assert_eq!(colors.iter().count(), 8);
    }

    #[test]
    fn test_set_replaces_only_one_slot() {
        let mut colors = ColorMapping::default();
        let before = colors.clone();
        colors.set(ColorKey::Leaves, "not a color");

        for (key, value) in colors.iter() {
            if key == ColorKey::Leaves {
                assert_eq!(value, "not a color");
            } else {
                assert_eq!(value, before.get(key));
            }
        }
        assert_eq!(colors.len(), ColorKey::COUNT);
    }

    #[test]
    fn test_serializes_with_wire_names_in_order() {
        let json = serde_json::to_string(&ColorMapping::default()).unwrap();
        assert!(json.starts_with("{\"sun\":\"#FFD700\",\"sunflowerPetals\":"));
        assert!(json.contains("\"background1\":\"#F5F5DC\""));

        let back: ColorMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorMapping::default());
    }

    #[test]
    fn test_deserialize_rejects_missing_key() {
        let result: Result<ColorMapping, _> = serde_json::from_str(r##"{"sun":"#FFFFFF"}"##);
        assert!(result.is_err());
    }
}
