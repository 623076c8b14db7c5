//! Mock geocoder for testing without network access.
//!
//! Serves places from an in-memory table as if they were live Nominatim
//! responses, and counts lookups so tests can assert what hit the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{Coordinates, ResolvedPoint};

use super::Geocoder;
use super::error::GeocodeError;

/// Mock geocoder backed by a query table.
///
/// This is useful for development and testing without hitting the public
/// Nominatim instance. Unknown queries behave like an empty search result.
#[derive(Default)]
pub struct MockGeocoder {
    /// Known places, keyed by the exact query text.
    places: HashMap<String, ResolvedPoint>,
    /// When set, every call fails as if the upstream were down.
    offline: bool,
    /// When set, every call fails as if the response body were unreadable.
    garbled: bool,
    /// Number of forward lookups served so far.
    searches: AtomicUsize,
}

impl MockGeocoder {
    /// Create an empty mock. Every search returns no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails with a 503.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Create a mock whose every call fails with an undecodable body.
    pub fn garbled() -> Self {
        Self {
            garbled: true,
            ..Self::default()
        }
    }

    /// Register a known place for `query`.
    pub fn with_place(mut self, query: &str, point: ResolvedPoint) -> Self {
        self.places.insert(query.to_string(), point);
        self
    }

    /// Number of forward lookups issued so far.
    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    fn check_upstream(&self) -> Result<(), GeocodeError> {
        if self.offline {
            return Err(GeocodeError::ApiError {
                status: 503,
                message: "mock geocoder is offline".to_string(),
            });
        }
        if self.garbled {
            return Err(GeocodeError::Json {
                message: "mock geocoder returned an unreadable body".to_string(),
                body: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn search(&self, query: &str) -> Result<ResolvedPoint, GeocodeError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.check_upstream()?;

        self.places
            .get(query)
            .cloned()
            .ok_or(GeocodeError::NoResults)
    }

    async fn reverse(&self, coords: Coordinates) -> Result<String, GeocodeError> {
        self.check_upstream()?;
        Ok(format!("{}, {}", coords.lat(), coords.lon()))
    }
}
