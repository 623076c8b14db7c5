//! OpenStreetMap Nominatim geocoding client.
//!
//! This module provides an HTTP client for the Nominatim API, which turns
//! free-text place queries into coordinates and coordinates back into
//! addresses.
//!
//! Key characteristics of how it is used here:
//! - Forward lookups request **one** candidate and take the first
//! - Lookups are best-effort: no caching, no retries, no ranking
//! - Responses carry coordinates as strings, which are parsed leniently
//! - Nominatim's usage policy requires an identifying User-Agent

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{NominatimClient, NominatimConfig};
pub use error::GeocodeError;
pub use mock::MockGeocoder;
pub use types::{ReversePlace, SearchHit};

use async_trait::async_trait;

use crate::domain::{Coordinates, ResolvedPoint};

/// Forward and reverse lookups against a geocoding service.
///
/// The comparison pipeline depends only on this trait, so tests and offline
/// development can swap in [`MockGeocoder`].
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve free text to a point.
    async fn search(&self, query: &str) -> Result<ResolvedPoint, GeocodeError>;

    /// Resolve a position to a human-readable address.
    async fn reverse(&self, coords: Coordinates) -> Result<String, GeocodeError>;
}
