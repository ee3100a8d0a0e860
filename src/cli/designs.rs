//! List the design catalog.

use crate::cli::common::{print_json, CliResult};
use crate::models::{QuoteBreakdown, DESIGN_OPTIONS};
use clap::Args;
use serde::Serialize;

/// List available designs with their price
#[derive(Args, Debug)]
pub struct DesignsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct DesignEntry {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    premium: bool,
    total: i64,
}

impl DesignsArgs {
    /// Execute designs command
    pub fn execute(&self) -> CliResult<()> {
        let entries: Vec<DesignEntry> = DESIGN_OPTIONS
            .iter()
            .map(|option| DesignEntry {
                id: option.id.id(),
                name: option.name,
                icon: option.icon,
                premium: option.id.is_premium(),
                total: QuoteBreakdown::for_design(option.id.id()).total,
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }

        println!("Available designs:");
        println!();
        for entry in &entries {
            let premium = if entry.premium { "  (diseño especial)" } else { "" };
            println!(
                "  {} {:<11} {:<20} ${}{}",
                entry.icon, entry.id, entry.name, entry.total, premium
            );
        }
        Ok(())
    }
}
