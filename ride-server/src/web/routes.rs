//! HTTP route handlers.

use std::sync::atomic::Ordering;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::compare::{CompareError, Comparer};
use crate::domain::Coordinates;
use crate::geocode::GeocodeError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// The API is called from a browser UI served elsewhere, so CORS is open.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/compare", post(compare_trip))
        .route("/api/reverse", get(reverse_geocode))
        .route("/api/visits", get(get_visits).post(record_visit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compare provider fares for a trip.
async fn compare_trip(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let comparer = Comparer::new(state.geocoder.as_ref(), state.providers);

    let comparison = comparer
        .compare(&req.into_trip_request())
        .await
        .map_err(AppError::from)?;

    Ok(Json(CompareResponse::from_comparison(&comparison)))
}

/// Reverse-geocode a position to an address for the location-detection UI.
async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<ReverseQuery>,
) -> Result<Json<ReverseResponse>, AppError> {
    let coords = parse_reverse_params(&query).ok_or_else(|| AppError::BadRequest {
        message: "lat and lon required".to_string(),
    })?;

    let address = state
        .geocoder
        .reverse(coords)
        .await
        .map_err(|e| match e {
            GeocodeError::ApiError { .. } => AppError::BadGateway {
                message: "lookup failed".to_string(),
            },
            _ => AppError::Internal {
                message: "reverse error".to_string(),
            },
        })?;

    Ok(Json(ReverseResponse { address }))
}

/// Parse the reverse-geocode query parameters into coordinates.
fn parse_reverse_params(query: &ReverseQuery) -> Option<Coordinates> {
    let lat: f64 = query.lat.as_deref()?.parse().ok()?;
    let lon: f64 = query.lon.as_deref()?.parse().ok()?;
    Coordinates::new(lat, lon).ok()
}

/// Read the visit counter without incrementing, so clients can poll.
async fn get_visits(State(state): State<AppState>) -> Json<VisitsResponse> {
    Json(VisitsResponse {
        visits: state.visits.load(Ordering::Relaxed),
    })
}

/// Record one visit and return the new total. Called once per page mount.
async fn record_visit(State(state): State<AppState>) -> Json<VisitsResponse> {
    let previous = state.visits.fetch_add(1, Ordering::Relaxed);
    Json(VisitsResponse {
        visits: previous + 1,
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<CompareError> for AppError {
    fn from(e: CompareError) -> Self {
        match e {
            CompareError::MissingInput(_) | CompareError::GeocodeFailed(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
