//! Rasterizes a [`TapestryPreview`] into a grid of colored cells.
//!
//! Each cell is sampled at its center. Elements thinner than a cell are
//! widened to one cell so threads and cords survive low resolutions.

// Grid coordinates are small; float <-> index casts are intentional.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use super::{
    Backdrop, GradientDirection, PreviewElement, Shape, TapestryPreview, UnitRect, BORDER_WIDTH,
    CANVAS_HEIGHT, CANVAS_WIDTH,
};
use crate::models::RgbColor;

/// One rasterized cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Color text painted on this cell, `None` outside the tapestry
    pub color: Option<String>,
    /// Glyph drawn on top of the cell
    pub glyph: Option<&'static str>,
}

/// A rasterized preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Samples `preview` onto a `cols`×`rows` grid spanning its bounds.
    #[must_use]
    pub fn rasterize(preview: &TapestryPreview, cols: usize, rows: usize) -> Self {
        let mut canvas = Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        };
        if cols == 0 || rows == 0 {
            return canvas;
        }

        let bounds = preview.bounds();
        let cell_w = bounds.w / cols as f32;
        let cell_h = bounds.h / rows as f32;

        for row in 0..rows {
            let v = bounds.y + (row as f32 + 0.5) * cell_h;
            for col in 0..cols {
                let u = bounds.x + (col as f32 + 0.5) * cell_w;
                let mut color = body_color(preview, u, v, cell_w, cell_h);
                for element in &preview.elements {
                    if contains(element, u, v, cell_w, cell_h) {
                        color = Some(element.color.clone());
                    }
                }
                canvas.cells[row * cols + col].color = color;
            }
        }

        for element in &preview.elements {
            if let Shape::Glyph(glyph) = element.shape {
                let col = ((element.rect.center_x() - bounds.x) / cell_w).floor();
                let row = ((element.rect.center_y() - bounds.y) / cell_h).floor();
                if col >= 0.0 && row >= 0.0 && (col as usize) < cols && (row as usize) < rows {
                    canvas.cells[row as usize * cols + col as usize].glyph = Some(glyph);
                }
            }
        }

        canvas
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Cell at (`col`, `row`).
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Cells of one row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

/// Backdrop or border color at a point, `None` outside the body.
fn body_color(preview: &TapestryPreview, u: f32, v: f32, cell_w: f32, cell_h: f32) -> Option<String> {
    if !(0.0..CANVAS_WIDTH).contains(&u) || !(0.0..CANVAS_HEIGHT).contains(&v) {
        return None;
    }

    // A cell is border when any part of it overlaps the border band
    let (half_w, half_h) = (cell_w / 2.0, cell_h / 2.0);
    if u - half_w < BORDER_WIDTH
        || u + half_w > CANVAS_WIDTH - BORDER_WIDTH
        || v - half_h < BORDER_WIDTH
        || v + half_h > CANVAS_HEIGHT - BORDER_WIDTH
    {
        return Some(preview.border.clone());
    }

    Some(match &preview.backdrop {
        Backdrop::Solid { color } => color.clone(),
        Backdrop::Stripes { bands } => {
            if bands.is_empty() {
                return None;
            }
            let index = ((v / CANVAS_HEIGHT) * bands.len() as f32) as usize;
            bands[index.min(bands.len() - 1)].clone()
        }
        Backdrop::Gradient { direction, stops } => {
            let t = match direction {
                GradientDirection::Vertical => v / CANVAS_HEIGHT,
                GradientDirection::Diagonal => (u / CANVAS_WIDTH + (1.0 - v / CANVAS_HEIGHT)) / 2.0,
            };
            gradient_at(stops, t)?
        }
    })
}

/// Blends gradient stops at `t`; unparseable stops fall back to the nearest stop's text.
fn gradient_at(stops: &[String], t: f32) -> Option<String> {
    match stops.len() {
        0 => None,
        1 => Some(stops[0].clone()),
        n => {
            let position = t.clamp(0.0, 1.0) * (n - 1) as f32;
            let index = (position.floor() as usize).min(n - 2);
            let frac = position - index as f32;
            let from = RgbColor::parse_lenient(&stops[index]);
            let to = RgbColor::parse_lenient(&stops[index + 1]);
            match (from, to) {
                (Some(from), Some(to)) => Some(from.lerp(&to, frac).to_hex()),
                _ => Some(stops[position.round() as usize].clone()),
            }
        }
    }
}

fn contains(element: &PreviewElement, u: f32, v: f32, cell_w: f32, cell_h: f32) -> bool {
    let rect: UnitRect = element.rect;
    let hw = (rect.w / 2.0).max(cell_w / 2.0);
    let hh = (rect.h / 2.0).max(cell_h / 2.0);
    let dx = u - rect.center_x();
    let dy = v - rect.center_y();

    match element.shape {
        Shape::Rect => dx.abs() <= hw && dy.abs() <= hh,
        Shape::Disc => (dx / hw).powi(2) + (dy / hh).powi(2) <= 1.0,
        Shape::Petal(angle) => {
            let (sin, cos) = angle.to_radians().sin_cos();
            let x = dx * cos + dy * sin;
            let y = -dx * sin + dy * cos;
            (x / hw).powi(2) + (y / hh).powi(2) <= 1.0
        }
        Shape::Triangle => {
            let depth = (v - rect.y) / rect.h;
            (0.0..=1.0).contains(&depth) && dx.abs() <= hw * depth
        }
        Shape::Diamond => dx.abs() / hw + dy.abs() / hh <= 1.0,
        Shape::Hexagon => dy.abs() <= hh && dx.abs() <= hw - (hw / 2.0) * (dy.abs() / hh),
        Shape::Glyph(_) => false,
    }
}
