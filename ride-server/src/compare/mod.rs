//! Trip comparison pipeline.
//!
//! This module implements the core flow that answers: "for this pickup and
//! dropoff, what would each provider charge, how soon could a car arrive,
//! and what link opens the trip in their app?"
//!
//! The flow is strictly forward: validate the request, resolve both
//! endpoints, measure the distance once, quote every configured provider,
//! rank the quotes. A failure at any stage fails the whole request; a
//! response never carries a partial provider list.

mod distance;
mod fare;
mod links;
mod rank;
mod resolve;

pub use distance::haversine_km;
pub use fare::{Estimate, estimate, round_cents};
pub use links::{TripLinks, build_links};
pub use rank::rank_quotes;
pub use resolve::{LocationInput, ResolveError, Side, resolve};

use tracing::{debug, warn};

use crate::domain::{CURRENCY_USD, Comparison, FareQuote, ProviderProfile};
use crate::geocode::Geocoder;

/// Error from trip comparison.
///
/// Display strings double as the client-facing error messages.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// A side of the trip had neither coordinates nor usable text
    #[error("{0} is required (address or coordinates).")]
    MissingInput(Side),

    /// One or both sides could not be resolved to a point
    #[error("Could not geocode one or both locations.")]
    GeocodeFailed(#[source] ResolveError),
}

/// A comparison request: one input per side, either of which may be absent.
#[derive(Debug, Clone, Default)]
pub struct TripRequest {
    pub pickup: Option<LocationInput>,
    pub dropoff: Option<LocationInput>,
}

impl TripRequest {
    pub fn new(pickup: Option<LocationInput>, dropoff: Option<LocationInput>) -> Self {
        Self { pickup, dropoff }
    }
}

/// Runs the comparison pipeline over a geocoder and a provider table.
pub struct Comparer<'a> {
    geocoder: &'a dyn Geocoder,
    providers: &'a [ProviderProfile],
}

impl<'a> Comparer<'a> {
    /// Create a comparer over the given collaborators.
    pub fn new(geocoder: &'a dyn Geocoder, providers: &'a [ProviderProfile]) -> Self {
        Self {
            geocoder,
            providers,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// The two endpoint resolutions are independent and run concurrently.
    /// Validation errors name the pickup side first.
    pub async fn compare(&self, request: &TripRequest) -> Result<Comparison, CompareError> {
        let pickup = required(&request.pickup, Side::Pickup)?;
        let dropoff = required(&request.dropoff, Side::Dropoff)?;

        let (from, to) = tokio::join!(
            resolve(self.geocoder, pickup, Side::Pickup),
            resolve(self.geocoder, dropoff, Side::Dropoff),
        );

        let from = from.map_err(geocode_failed)?;
        let to = to.map_err(geocode_failed)?;

        let distance_km = haversine_km(from.coords, to.coords);
        debug!(distance_km, from = %from.label, to = %to.label, "resolved trip");

        let quotes: Vec<FareQuote> = self
            .providers
            .iter()
            .map(|profile| {
                let est = estimate(distance_km, profile);
                let trip_links = build_links(&profile.links, &from, &to);

                FareQuote {
                    provider: profile.name.to_string(),
                    estimate_usd: est.estimate_usd,
                    eta_minutes: est.eta_minutes,
                    deep_link: trip_links.app,
                    web_link: trip_links.web,
                }
            })
            .collect();

        Ok(Comparison {
            from,
            to,
            distance_km,
            currency: CURRENCY_USD,
            quotes: rank_quotes(quotes),
        })
    }
}

/// Check that a side was supplied at all. Blank text counts as absent.
fn required(input: &Option<LocationInput>, side: Side) -> Result<&LocationInput, CompareError> {
    match input {
        Some(LocationInput::Query(text)) if text.trim().is_empty() => {
            Err(CompareError::MissingInput(side))
        }
        Some(input) => Ok(input),
        None => Err(CompareError::MissingInput(side)),
    }
}

fn geocode_failed(err: ResolveError) -> CompareError {
    warn!(error = %err, "endpoint resolution failed");
    CompareError::GeocodeFailed(err)
}
