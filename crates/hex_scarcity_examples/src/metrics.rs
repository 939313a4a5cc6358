//! Headline numbers shown next to a rendered board.
//!
//! These are display formulas chosen for the dashboard, not properties of the
//! sampler.
use hex_scarcity::prelude::SamplingResult;

/// Derived display metrics for one sampling result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Surviving tile share as a percentage.
    pub stability: f64,
    /// Output index, 100 for an intact board.
    pub gdp_index: f64,
    pub failed_tiles: usize,
}

impl DisplayMetrics {
    pub fn from_result(result: &SamplingResult) -> Self {
        let failed = result.failed_fraction();
        Self {
            stability: 100.0 * (1.0 - failed),
            // Failures hurt output more than proportionally.
            gdp_index: 100.0 * (1.0 - failed).powf(1.5),
            failed_tiles: result.failed_count(),
        }
    }

    pub fn headline(&self) -> String {
        format!(
            "stability {:.0}% | GDP index {:.1} | {} collapsed zones",
            self.stability, self.gdp_index, self.failed_tiles
        )
    }
}
