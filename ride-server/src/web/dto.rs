//! Data transfer objects for web requests and responses.
//!
//! Field names here are wire contract: clients send camelCase and read
//! camelCase back, except for `display_name`, which passes through in the
//! upstream geocoder's spelling.

use serde::{Deserialize, Serialize};

use crate::compare::{LocationInput, TripRequest};
use crate::domain::{Comparison, FareQuote, ResolvedPoint};

/// Request to compare fares for a trip.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Pickup as free text: an address or a typed-out "lat, lon" pair
    pub from: Option<String>,

    /// Dropoff as free text
    pub to: Option<String>,

    /// Pickup as a literal pair; takes precedence over `from`
    pub from_coord: Option<CoordParam>,

    /// Dropoff as a literal pair; takes precedence over `to`
    pub to_coord: Option<CoordParam>,
}

/// A raw coordinate pair as sent by the client.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordParam {
    pub lat: f64,
    pub lon: f64,
}

impl CompareRequest {
    /// Convert the wire shape into pipeline inputs.
    ///
    /// Presence is all that matters here; emptiness and validity checks
    /// belong to the pipeline.
    pub fn into_trip_request(self) -> TripRequest {
        TripRequest::new(
            side_input(self.from_coord, self.from),
            side_input(self.to_coord, self.to),
        )
    }
}

fn side_input(coord: Option<CoordParam>, text: Option<String>) -> Option<LocationInput> {
    if let Some(c) = coord {
        return Some(LocationInput::Coordinates {
            lat: c.lat,
            lon: c.lon,
        });
    }
    text.map(LocationInput::Query)
}

/// A resolved trip endpoint in a response.
#[derive(Debug, Serialize)]
pub struct PointResult {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Label shown to the user for this endpoint
    pub display_name: String,
}

/// One provider's quote in a response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Provider display name
    pub provider: String,

    /// Price estimate in USD, rounded to cents
    pub estimate_usd: f64,

    /// Minutes until pickup
    pub eta_min: i64,

    /// Opens the provider's native app
    pub deep_link: String,

    /// Browser fallback
    pub web_link: String,
}

/// Response for a fare comparison.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    /// Resolved pickup
    pub from: PointResult,

    /// Resolved dropoff
    pub to: PointResult,

    /// Great-circle trip distance in kilometres
    pub distance_km: f64,

    /// Currency of every estimate
    pub currency: String,

    /// Quotes ranked cheapest first
    pub results: Vec<QuoteResult>,
}

/// Query parameters for reverse geocoding.
#[derive(Debug, Default, Deserialize)]
pub struct ReverseQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Response for reverse geocoding.
#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    /// Human-readable address of the position
    pub address: String,
}

/// Response carrying the visit counter.
#[derive(Debug, Serialize)]
pub struct VisitsResponse {
    /// Total visits recorded since process start
    pub visits: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PointResult {
    /// Create from a resolved domain point.
    pub fn from_point(point: &ResolvedPoint) -> Self {
        Self {
            lat: point.coords.lat(),
            lon: point.coords.lon(),
            display_name: point.label.clone(),
        }
    }
}

impl QuoteResult {
    /// Create from a domain quote.
    pub fn from_quote(quote: &FareQuote) -> Self {
        Self {
            provider: quote.provider.clone(),
            estimate_usd: quote.estimate_usd,
            eta_min: quote.eta_minutes,
            deep_link: quote.deep_link.clone(),
            web_link: quote.web_link.clone(),
        }
    }
}

impl CompareResponse {
    /// Create from a domain comparison.
    pub fn from_comparison(comparison: &Comparison) -> Self {
        Self {
            from: PointResult::from_point(&comparison.from),
            to: PointResult::from_point(&comparison.to),
            distance_km: comparison.distance_km,
            currency: comparison.currency.to_string(),
            results: comparison.quotes.iter().map(QuoteResult::from_quote).collect(),
        }
    }
}
