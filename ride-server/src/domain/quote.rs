//! Quote and comparison result types.

use super::ResolvedPoint;

/// Currency every estimate is denominated in.
pub const CURRENCY_USD: &str = "USD";

/// One provider's offer for a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    /// Provider display name.
    pub provider: String,

    /// Price estimate in USD, rounded to the nearest cent.
    pub estimate_usd: f64,

    /// Minutes until pickup, never below the dispatch floor.
    pub eta_minutes: i64,

    /// Opens the trip in the provider's native app.
    pub deep_link: String,

    /// Browser fallback for the same trip.
    pub web_link: String,
}

/// The complete answer to one comparison request.
///
/// Derived from the resolved endpoints; all quotes present or none.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub from: ResolvedPoint,
    pub to: ResolvedPoint,

    /// Great-circle distance between the endpoints, in kilometres.
    pub distance_km: f64,

    /// Always [`CURRENCY_USD`] for now.
    pub currency: &'static str,

    /// Quotes ranked cheapest first.
    pub quotes: Vec<FareQuote>,
}
