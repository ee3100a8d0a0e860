//! Price quote derived from the selected design.

// Amounts are small whole numbers; rounding to i64 cannot truncate.
#![allow(clippy::cast_possible_truncation)]

use serde::Serialize;

use super::Design;

/// Base price of a standard tapestry.
pub const BASE_PRICE: i64 = 150;

/// Flat surcharge for custom colors, applied to every quote.
pub const CUSTOMIZATION_SURCHARGE: i64 = 20;

/// Price multiplier for premium designs.
pub const PREMIUM_MULTIPLIER: f64 = 1.2;

/// Price components shown to the user. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    /// Base tapestry price
    pub base: i64,
    /// Custom colors surcharge
    pub customization: i64,
    /// Premium design surcharge (zero for regular designs)
    pub design: i64,
    /// Total price
    pub total: i64,
}

impl QuoteBreakdown {
    /// Computes the quote for a design identifier.
    ///
    /// Colors never affect the price. Identifiers outside the catalog are
    /// priced as regular designs.
    ///
    /// ```
    /// use tapiz_designer::models::QuoteBreakdown;
    ///
    /// assert_eq!(QuoteBreakdown::for_design("geometric").total, 200);
    /// assert_eq!(QuoteBreakdown::for_design("roses").total, 170);
    /// ```
    #[must_use]
    pub fn for_design(design_id: &str) -> Self {
        let multiplier = match Design::from_id(design_id) {
            Some(design) if design.is_premium() => PREMIUM_MULTIPLIER,
            _ => 1.0,
        };
        Self::with_multiplier(multiplier)
    }

    fn with_multiplier(multiplier: f64) -> Self {
        let base = BASE_PRICE as f64;
        Self {
            base: BASE_PRICE,
            customization: CUSTOMIZATION_SURCHARGE,
            design: (base * (multiplier - 1.0)).round() as i64,
            total: (base * multiplier + CUSTOMIZATION_SURCHARGE as f64).round() as i64,
        }
    }

    /// Whether the premium line should be shown.
    #[must_use]
    pub const fn has_design_surcharge(&self) -> bool {
        self.design > 0
    }
}
