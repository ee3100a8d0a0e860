//! Preview panel: draws the rasterized tapestry with half-block cells.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::AppState;
use crate::models::RgbColor;
use crate::preview::{Canvas, Cell, TapestryPreview};

const UPPER_HALF_BLOCK: &str = "▀";

/// Preview panel widget
pub struct PreviewWidget;

impl PreviewWidget {
    /// Render the preview panel for the current session
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let flag = if state.session.show_preview() { "●" } else { "○" };
        let block = Block::default()
            .title(format!(" Vista Previa {flag} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        match state.session.preview() {
            Some(preview) => draw_canvas(f, inner, &preview, theme.surface),
            None => {
                let message = Paragraph::new(format!(
                    "Sin vista previa para '{}'",
                    state.session.selected_design()
                ))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true });
                f.render_widget(message, inner);
            }
        }
    }
}

/// Largest (cols, pixel rows) that fits `area` and keeps the preview's aspect.
pub(crate) fn fit(preview: &TapestryPreview, area: Rect) -> (usize, usize) {
    let bounds = preview.bounds();
    let max_cols = f32::from(area.width);
    let max_pixels = f32::from(area.height) * 2.0;

    let cols = max_cols.min(max_pixels * bounds.w / bounds.h).floor();
    let pixels = (cols * bounds.h / bounds.w).floor().min(max_pixels);
    (cols as usize, pixels as usize)
}

fn cell_color(cell: &Cell) -> Option<Color> {
    RgbColor::parse_lenient(cell.color.as_deref()?).map(|color| color.to_ratatui_color())
}

fn draw_canvas(f: &mut Frame, area: Rect, preview: &TapestryPreview, background: Color) {
    let (cols, pixels) = fit(preview, area);
    if cols == 0 || pixels < 2 {
        return;
    }
    let rows = pixels / 2;
    let canvas = Canvas::rasterize(preview, cols, rows * 2);

    let x0 = area.x + (area.width - cols as u16) / 2;
    let y0 = area.y + (area.height - rows as u16) / 2;
    let buf = f.buffer_mut();

    for row in 0..rows {
        let top = canvas.row(row * 2);
        let bottom = canvas.row(row * 2 + 1);
        let mut skip = false;

        for (col, (upper, lower)) in top.iter().zip(bottom).enumerate() {
            if skip {
                skip = false;
                continue;
            }
            let Some(cell) = buf.cell_mut((x0 + col as u16, y0 + row as u16)) else {
                continue;
            };

            if let Some(glyph) = upper.glyph.or(lower.glyph) {
                cell.set_symbol(glyph);
                cell.set_bg(cell_color(upper).unwrap_or(background));
                skip = true;
                continue;
            }

            cell.set_symbol(UPPER_HALF_BLOCK)
                .set_fg(cell_color(upper).unwrap_or(background))
                .set_bg(cell_color(lower).unwrap_or(background));
        }
    }
}
