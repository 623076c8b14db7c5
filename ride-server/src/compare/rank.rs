//! Quote ranking for comparison results.

use std::cmp::Ordering;

use crate::domain::FareQuote;

/// Rank quotes for presentation, cheapest first.
///
/// The sort is stable: quotes with equal estimates keep the provider
/// table's declaration order. Estimates are finite by construction, so the
/// `Equal` fallback never reorders anything real.
pub fn rank_quotes(mut quotes: Vec<FareQuote>) -> Vec<FareQuote> {
    quotes.sort_by(|a, b| {
        a.estimate_usd
            .partial_cmp(&b.estimate_usd)
            .unwrap_or(Ordering::Equal)
    });

    quotes
}
