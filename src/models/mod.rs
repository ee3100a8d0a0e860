//! Data models for palettes, designs, presets, favorites and quotes.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of UI and dispatch logic.

pub mod color_mapping;
pub mod design;
pub mod favorite;
pub mod preset;
pub mod quote;
pub mod rgb;

// Re-export all model types
pub use color_mapping::{ColorKey, ColorMapping};
pub use design::{design_name, find_design, Design, DesignOption, CUSTOM_DESIGN_NAME, DESIGN_OPTIONS};
pub use favorite::FavoriteSnapshot;
pub use preset::{find_preset, Preset, PRESETS};
pub use quote::QuoteBreakdown;
pub use rgb::RgbColor;
