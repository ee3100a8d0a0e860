//! Show the price quote for a design.

use crate::cli::common::{print_json, CliResult};
use crate::models::{design_name, Design, QuoteBreakdown};
use clap::Args;
use serde::Serialize;

/// Show the quote breakdown for a design
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Design identifier; unknown identifiers are priced as regular designs
    #[arg(long, value_name = "ID", default_value = Design::DEFAULT.id())]
    design: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct QuoteOutput<'a> {
    id: &'a str,
    name: &'static str,
    #[serde(flatten)]
    quote: QuoteBreakdown,
}

impl QuoteArgs {
    /// Execute quote command
    pub fn execute(&self) -> CliResult<()> {
        let design = self.design.trim();
        let output = QuoteOutput {
            id: design,
            name: design_name(design),
            quote: QuoteBreakdown::for_design(design),
        };

        if self.json {
            return print_json(&output);
        }

        println!("Cotización: {}", output.name);
        println!();
        for line in quote_lines(&output.quote) {
            println!("  {line}");
        }
        Ok(())
    }
}

/// Breakdown lines in display order; the design surcharge only when non-zero.
pub(crate) fn quote_lines(quote: &QuoteBreakdown) -> Vec<String> {
    let mut lines = vec![
        format!("{:<18}${}", "Tapiz base:", quote.base),
        format!("{:<18}${}", "Personalización:", quote.customization),
    ];
    if quote.has_design_surcharge() {
        lines.push(format!("{:<18}${}", "Diseño especial:", quote.design));
    }
    lines.push(format!("{:<18}${}", "Total:", quote.total));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_lines_regular() {
        let lines = quote_lines(&QuoteBreakdown::for_design("roses"));
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("$170"));
    }

    #[test]
    fn test_quote_lines_premium() {
        let lines = quote_lines(&QuoteBreakdown::for_design("geometric"));
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Diseño especial:"));
        assert!(lines[2].ends_with("$30"));
        assert!(lines[3].ends_with("$200"));
    }
}
