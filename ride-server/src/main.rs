use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ride_server::domain::PROVIDERS;
use ride_server::geocode::{NominatimClient, NominatimConfig};
use ride_server::web::{AppState, create_router};

/// Default bind address when RIDE_BIND is not set.
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Geocoder config from environment
    let mut geocoder_config = NominatimConfig::new();
    if let Ok(url) = std::env::var("NOMINATIM_URL") {
        info!(%url, "using custom Nominatim instance");
        geocoder_config = geocoder_config.with_base_url(url);
    }
    let geocoder = NominatimClient::new(geocoder_config).expect("Failed to create geocoding client");

    // Build app state
    let state = AppState::new(Arc::new(geocoder), PROVIDERS);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("RIDE_BIND")
        .unwrap_or_else(|_| DEFAULT_BIND.to_string())
        .parse()
        .expect("RIDE_BIND must be a socket address");

    info!("Ride fare comparison listening on http://{addr}");
    info!("  GET  /health       - Health check");
    info!("  POST /api/compare  - Compare provider fares for a trip");
    info!("  GET  /api/reverse  - Reverse-geocode a position");
    info!("  GET  /api/visits   - Read the visit counter");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
