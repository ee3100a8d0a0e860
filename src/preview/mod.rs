//! Tapestry preview: a pure description of what a design looks like.
//!
//! [`render_preview`] maps a palette and a design identifier to a
//! [`TapestryPreview`]: a backdrop, a border and an ordered list of
//! decorative elements placed on a 48×72 unit canvas (y grows downwards,
//! elements may hang outside the canvas, e.g. the cord above it). Drawing
//! the description is left to [`canvas::Canvas`] and the front ends.

pub mod canvas;
mod layouts;

pub use canvas::{Canvas, Cell};

use serde::Serialize;

use crate::models::{ColorMapping, Design};

/// Canvas width in layout units.
pub const CANVAS_WIDTH: f32 = 48.0;

/// Canvas height in layout units.
pub const CANVAS_HEIGHT: f32 = 72.0;

/// Border thickness in layout units.
pub const BORDER_WIDTH: f32 = 0.75;

/// Direction of a gradient backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    /// Top to bottom
    Vertical,
    /// Bottom-left to top-right (45°)
    Diagonal,
}

/// How the tapestry body is filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Backdrop {
    /// Equal-height horizontal bands, listed top to bottom
    Stripes {
        /// Band colors
        bands: Vec<String>,
    },
    /// Evenly spaced gradient stops
    Gradient {
        /// Direction of the gradient
        direction: GradientDirection,
        /// Stop colors
        stops: Vec<String>,
    },
    /// A single color
    Solid {
        /// Fill color
        color: String,
    },
}

/// Shape of a decorative element, filling its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect,
    /// Ellipse inscribed in the box
    Disc,
    /// Ellipse rotated by the given angle in degrees (petals, leaves)
    Petal(f32),
    /// Upward-pointing triangle
    Triangle,
    /// Rhombus touching the middle of each side
    Diamond,
    /// Flat-topped hexagon
    Hexagon,
    /// A text glyph centered in the box, no fill
    Glyph(&'static str),
}

/// Axis-aligned box in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl UnitRect {
    /// Creates a box.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of size `w`×`h` centered on (`cx`, `cy`).
    #[must_use]
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// One decorative element of a preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewElement {
    /// What the element depicts ("sun", "petal", "fringe thread", ...)
    pub name: &'static str,
    /// Shape drawn inside `rect`
    pub shape: Shape,
    /// Color text taken from the palette, unvalidated
    pub color: String,
    /// Bounding box
    pub rect: UnitRect,
}

/// Deterministic visual description of a tapestry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TapestryPreview {
    /// Design this preview depicts
    pub design: Design,
    /// Body fill
    pub backdrop: Backdrop,
    /// Border color around the body
    pub border: String,
    /// Elements painted in order, later ones on top
    pub elements: Vec<PreviewElement>,
}

impl TapestryPreview {
    /// Bounding box covering the body and every element.
    #[must_use]
    pub fn bounds(&self) -> UnitRect {
        let (mut x0, mut y0, mut x1, mut y1) = (0.0_f32, 0.0_f32, CANVAS_WIDTH, CANVAS_HEIGHT);
        for element in &self.elements {
            x0 = x0.min(element.rect.x);
            y0 = y0.min(element.rect.y);
            x1 = x1.max(element.rect.right());
            y1 = y1.max(element.rect.bottom());
        }
        UnitRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Elements with the given name.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PreviewElement> + 'a {
        self.elements.iter().filter(move |element| element.name == name)
    }
}

/// Builds the preview for a design identifier.
///
/// Returns `None` for identifiers outside the design catalog.
#[must_use]
pub fn render_preview(colors: &ColorMapping, design_id: &str) -> Option<TapestryPreview> {
    let design = Design::from_id(design_id)?;
    Some(render_design(colors, design))
}

/// Builds the preview for a known design.
#[must_use]
pub fn render_design(colors: &ColorMapping, design: Design) -> TapestryPreview {
    match design {
        Design::Sunflowers => layouts::sunflowers(colors),
        Design::Roses => layouts::roses(colors),
        Design::Abstract => layouts::abstract_shapes(colors),
        Design::Geometric => layouts::geometric(colors),
    }
}
