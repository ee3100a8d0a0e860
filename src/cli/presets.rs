//! List the preset palettes.

use crate::cli::common::{print_json, CliResult};
use crate::models::{ColorMapping, RgbColor, PRESETS};
use clap::Args;
use crossterm::style::Stylize;
use serde::Serialize;

/// List preset palettes
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PresetEntry {
    name: &'static str,
    colors: ColorMapping,
}

impl PresetsArgs {
    /// Execute presets command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            let entries: Vec<PresetEntry> = PRESETS
                .iter()
                .map(|preset| PresetEntry {
                    name: preset.name,
                    colors: preset.colors(),
                })
                .collect();
            return print_json(&entries);
        }

        println!("Paletas de inspiración:");
        println!();
        for preset in &PRESETS {
            let swatches: String = preset
                .swatches(4)
                .iter()
                .map(|hex| swatch(hex))
                .collect();
            println!("  {} {}", swatches, preset.name);
            for (key, value) in preset.colors().iter() {
                println!("      {:<16} {}", key.as_str(), value);
            }
        }
        Ok(())
    }
}

/// Two colored cells for a parseable color, `??` otherwise.
pub(crate) fn swatch(text: &str) -> String {
    match RgbColor::parse_lenient(text) {
        Some(color) => "  "
            .on(crossterm::style::Color::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            })
            .to_string(),
        None => "??".to_string(),
    }
}
