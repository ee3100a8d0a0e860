//! Render the tapestry preview in the terminal.

// Terminal sizes are small; float <-> integer casts are intentional.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::cli::common::{print_json, CliError, CliResult, SessionArgs};
use crate::models::RgbColor;
use crate::preview::{Canvas, Cell, TapestryPreview};
use clap::Args;
use crossterm::style::{Color, Stylize};

const UPPER_HALF_BLOCK: &str = "▀";

/// Largest width or height accepted, in terminal cells.
const MAX_SIZE: u16 = 400;

/// Draw the preview of a design with half-block characters
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Width in terminal columns
    #[arg(long, value_name = "N", default_value_t = 32)]
    width: u16,

    /// Height in terminal rows (derived from the width when omitted)
    #[arg(long, value_name = "N")]
    height: Option<u16>,

    /// Output the preview description as JSON instead of drawing it
    #[arg(long)]
    json: bool,
}

impl PreviewArgs {
    /// Execute preview command
    pub fn execute(&self) -> CliResult<()> {
        if self.width == 0 || self.height == Some(0) {
            return Err(CliError::validation("Width and height must be positive"));
        }
        if self.width > MAX_SIZE || self.height.is_some_and(|h| h > MAX_SIZE) {
            return Err(CliError::validation(format!(
                "Width and height must be at most {MAX_SIZE}"
            )));
        }

        let session = self.session.build_session()?;
        let preview = session.preview();

        if self.json {
            return print_json(&preview);
        }

        let Some(preview) = preview else {
            println!(
                "No preview available for design '{}'",
                session.selected_design()
            );
            return Ok(());
        };

        let cols = usize::from(self.width);
        let rows = self.height.map_or_else(
            || default_rows(&preview, cols).min(usize::from(MAX_SIZE)),
            usize::from,
        );

        for line in render_lines(&preview, cols, rows) {
            println!("{line}");
        }
        Ok(())
    }
}

/// Text rows that keep the tapestry's aspect ratio, two pixels per row.
fn default_rows(preview: &TapestryPreview, cols: usize) -> usize {
    let bounds = preview.bounds();
    let pixel_rows = cols as f32 * bounds.h / bounds.w;
    ((pixel_rows / 2.0).round() as usize).max(1)
}

fn terminal_color(cell: &Cell) -> Option<Color> {
    let color = RgbColor::parse_lenient(cell.color.as_deref()?)?;
    Some(Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    })
}

/// Draws `rows` lines, each packing two canvas rows into one half-block row.
pub(crate) fn render_lines(preview: &TapestryPreview, cols: usize, rows: usize) -> Vec<String> {
    let canvas = Canvas::rasterize(preview, cols, rows * 2);
    let mut lines = Vec::with_capacity(rows);

    for row in 0..rows {
        let top = canvas.row(row * 2);
        let bottom = canvas.row(row * 2 + 1);
        let mut line = String::new();
        let mut skip = 0;

        for (upper, lower) in top.iter().zip(bottom) {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            // Glyphs are drawn as-is and take two columns
            if let Some(glyph) = upper.glyph.or(lower.glyph) {
                line.push_str(glyph);
                skip = 1;
                continue;
            }

            let styled = match (terminal_color(upper), terminal_color(lower)) {
                (Some(fg), Some(bg)) => UPPER_HALF_BLOCK.with(fg).on(bg).to_string(),
                (Some(fg), None) => UPPER_HALF_BLOCK.with(fg).to_string(),
                (None, Some(bg)) => " ".on(bg).to_string(),
                (None, None) => " ".to_string(),
            };
            line.push_str(&styled);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorMapping, Design};
    use crate::preview::render_design;

    #[test]
    fn test_default_rows_keeps_aspect() {
        let preview = render_design(&ColorMapping::default(), Design::Geometric);
        // 48x72 body: 32 columns -> 48 pixels -> 24 rows
        assert_eq!(default_rows(&preview, 32), 24);
    }

    #[test]
    fn test_render_lines_count() {
        let preview = render_design(&ColorMapping::default(), Design::Abstract);
        let lines = render_lines(&preview, 20, 15);
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn test_render_lines_contains_rose_glyph() {
        let preview = render_design(&ColorMapping::default(), Design::Roses);
        let lines = render_lines(&preview, 24, 18);
        assert_eq!(lines.iter().filter(|line| line.contains('🌹')).count(), 1);
    }
}
