//! Application state for the web layer.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use crate::domain::ProviderProfile;
use crate::geocode::Geocoder;

/// Shared application state.
///
/// Everything here is either immutable or internally synchronized, so
/// handlers share it freely.
#[derive(Clone)]
pub struct AppState {
    /// Geocoding collaborator; a trait object so tests can swap in a mock
    pub geocoder: Arc<dyn Geocoder>,

    /// The provider table, fixed for the lifetime of the process
    pub providers: &'static [ProviderProfile],

    /// Page visits recorded since process start
    pub visits: Arc<AtomicU64>,
}

impl AppState {
    /// Create a new app state over a geocoder and a provider table.
    pub fn new(geocoder: Arc<dyn Geocoder>, providers: &'static [ProviderProfile]) -> Self {
        Self {
            geocoder,
            providers,
            visits: Arc::new(AtomicU64::new(0)),
        }
    }
}
