//! Location resolution: turning request input into resolved points.
//!
//! Every side of a trip arrives either as a literal coordinate pair or as
//! free text. Text is first given a structured numeric parse; only text
//! that fails it is sent to the geocoder. The split is decided before any
//! I/O happens, so a literal input never costs a network call.

use std::fmt;

use tracing::debug;

use crate::domain::{Coordinates, ResolvedPoint};
use crate::geocode::{GeocodeError, Geocoder};

/// One side of a trip, as supplied by the client.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    /// A literal coordinate pair, not yet range-checked.
    Coordinates { lat: f64, lon: f64 },

    /// Free text: an address, a place name, or a typed-out coordinate pair.
    Query(String),
}

/// Which side of the trip an input belongs to.
///
/// Determines the label given to literal coordinate pairs and the wording
/// of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Pickup,
    Dropoff,
}

impl Side {
    /// Label used when a literal pair has no text of its own.
    fn literal_label(self) -> &'static str {
        match self {
            Side::Pickup => "Current location",
            Side::Dropoff => "Destination",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Pickup => f.write_str("Pickup"),
            Side::Dropoff => f.write_str("Dropoff"),
        }
    }
}

/// Failure to resolve one side of a trip.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Input text was empty or blank
    #[error("location input is empty")]
    EmptyInput,

    /// A literal pair was out of range or not finite
    #[error("coordinates out of range")]
    InvalidCoordinates,

    /// The geocoder had no match for the query
    #[error("no match for {query:?}")]
    NotFound { query: String },

    /// Could not complete the geocoder lookup
    #[error("geocoding failed: {0}")]
    Transport(#[source] GeocodeError),
}

/// An input after the literal/lookup split, before any I/O.
enum Planned {
    Literal(ResolvedPoint),
    NeedsLookup(String),
}

/// Resolve one side of a trip to a point.
///
/// Literal pairs resolve without I/O and are labelled by `side`. Text that
/// reads as a valid coordinate pair is treated as literal, keeping the
/// trimmed text as its label. Everything else costs exactly one geocoder
/// lookup.
pub async fn resolve(
    geocoder: &dyn Geocoder,
    input: &LocationInput,
    side: Side,
) -> Result<ResolvedPoint, ResolveError> {
    match plan(input, side)? {
        Planned::Literal(point) => Ok(point),
        Planned::NeedsLookup(query) => {
            debug!(%side, query = %query, "geocoding");
            geocoder
                .search(&query)
                .await
                .map_err(|e| lookup_error(&query, e))
        }
    }
}

/// Decide how an input will resolve, without performing the lookup.
fn plan(input: &LocationInput, side: Side) -> Result<Planned, ResolveError> {
    match input {
        LocationInput::Coordinates { lat, lon } => {
            let coords = Coordinates::new(*lat, *lon)
                .map_err(|_| ResolveError::InvalidCoordinates)?;
            Ok(Planned::Literal(ResolvedPoint::new(
                coords,
                side.literal_label(),
            )))
        }
        LocationInput::Query(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(ResolveError::EmptyInput);
            }
            match parse_latlon(text) {
                Some(coords) => Ok(Planned::Literal(ResolvedPoint::new(coords, text))),
                None => Ok(Planned::NeedsLookup(text.to_string())),
            }
        }
    }
}

/// Map a lookup failure onto the resolution taxonomy.
///
/// An upstream error status or an empty candidate list both mean "this
/// query does not name a place we know"; anything else is transport.
fn lookup_error(query: &str, err: GeocodeError) -> ResolveError {
    match err {
        GeocodeError::NoResults | GeocodeError::ApiError { .. } => ResolveError::NotFound {
            query: query.to_string(),
        },
        other => ResolveError::Transport(other),
    }
}

/// Parse text as a typed-out coordinate pair.
///
/// The first two comma- or whitespace-separated tokens must parse as
/// decimal numbers and form valid coordinates; tokens after them are
/// ignored. Text that misses either bar reads as an address instead.
fn parse_latlon(text: &str) -> Option<Coordinates> {
    let mut tokens = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let lat: f64 = tokens.next()?.parse().ok()?;
    let lon: f64 = tokens.next()?.parse().ok()?;

    Coordinates::new(lat, lon).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::MockGeocoder;

    fn point(lat: f64, lon: f64, label: &str) -> ResolvedPoint {
        ResolvedPoint::new(Coordinates::new(lat, lon).unwrap(), label)
    }

    #[test]
    fn parse_comma_separated_pair() {
        let coords = parse_latlon("40.7128,-74.0060").unwrap();
        assert_eq!(coords.lat(), 40.7128);
        assert_eq!(coords.lon(), -74.0060);
    }

    #[test]
    fn parse_tolerates_spacing() {
        assert!(parse_latlon("40.7128, -74.0060").is_some());
        assert!(parse_latlon("40.7128 -74.0060").is_some());
        assert!(parse_latlon("  40.7128 ,  -74.0060  ").is_some());
    }

    #[test]
    fn parse_ignores_trailing_tokens() {
        let coords = parse_latlon("40.7128, -74.0060, ignored, 99").unwrap();
        assert_eq!(coords.lat(), 40.7128);
        assert_eq!(coords.lon(), -74.0060);
    }

    #[test]
    fn parse_rejects_addresses() {
        assert!(parse_latlon("350 5th Avenue").is_none());
        assert!(parse_latlon("Times Square").is_none());
        assert!(parse_latlon("40.7128").is_none());
        assert!(parse_latlon("40.7128,").is_none());
    }

    #[test]
    fn parse_rejects_non_finite_numbers() {
        assert!(parse_latlon("inf, 0").is_none());
        assert!(parse_latlon("NaN NaN").is_none());
    }

    #[test]
    fn parse_rejects_out_of_range_pairs() {
        // Plausible street addresses must not read as coordinates
        assert!(parse_latlon("1600 41").is_none());
        assert!(parse_latlon("91, 0").is_none());
        assert!(parse_latlon("0, 181").is_none());
    }

    #[test]
    fn lookup_error_taxonomy() {
        assert!(matches!(
            lookup_error("x", GeocodeError::NoResults),
            ResolveError::NotFound { .. }
        ));
        assert!(matches!(
            lookup_error(
                "x",
                GeocodeError::ApiError {
                    status: 503,
                    message: String::new()
                }
            ),
            ResolveError::NotFound { .. }
        ));
        assert!(matches!(
            lookup_error(
                "x",
                GeocodeError::Json {
                    message: "truncated".into(),
                    body: None
                }
            ),
            ResolveError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn literal_pair_uses_side_label() {
        let mock = MockGeocoder::new();
        let input = LocationInput::Coordinates {
            lat: 40.7128,
            lon: -74.0060,
        };

        let from = resolve(&mock, &input, Side::Pickup).await.unwrap();
        assert_eq!(from.label, "Current location");

        let to = resolve(&mock, &input, Side::Dropoff).await.unwrap();
        assert_eq!(to.label, "Destination");

        // Literal pairs never reach the geocoder
        assert_eq!(mock.search_count(), 0);
    }

    #[tokio::test]
    async fn literal_pair_out_of_range_is_rejected() {
        let mock = MockGeocoder::new();
        let input = LocationInput::Coordinates {
            lat: 91.0,
            lon: 0.0,
        };

        let result = resolve(&mock, &input, Side::Pickup).await;
        assert!(matches!(result, Err(ResolveError::InvalidCoordinates)));
        assert_eq!(mock.search_count(), 0);
    }

    #[tokio::test]
    async fn coordinate_text_resolves_without_lookup() {
        let mock = MockGeocoder::new();
        let input = LocationInput::Query("  40.7306, -73.9352 ".to_string());

        let resolved = resolve(&mock, &input, Side::Dropoff).await.unwrap();
        assert_eq!(resolved.coords.lat(), 40.7306);
        assert_eq!(resolved.coords.lon(), -73.9352);
        assert_eq!(resolved.label, "40.7306, -73.9352");
        assert_eq!(mock.search_count(), 0);
    }

    #[tokio::test]
    async fn address_text_goes_to_geocoder() {
        let mock = MockGeocoder::new()
            .with_place("Times Square", point(40.758, -73.9855, "Times Square, Manhattan"));
        let input = LocationInput::Query("Times Square".to_string());

        let resolved = resolve(&mock, &input, Side::Pickup).await.unwrap();
        assert_eq!(resolved.label, "Times Square, Manhattan");
        assert_eq!(mock.search_count(), 1);
    }

    #[tokio::test]
    async fn out_of_range_numeric_text_goes_to_geocoder() {
        let mock = MockGeocoder::new();
        let input = LocationInput::Query("1600 41".to_string());

        let result = resolve(&mock, &input, Side::Pickup).await;
        assert!(matches!(result, Err(ResolveError::NotFound { .. })));
        assert_eq!(mock.search_count(), 1);
    }

    #[tokio::test]
    async fn blank_text_is_empty_input() {
        let mock = MockGeocoder::new();

        for text in ["", "   ", "\t\n"] {
            let input = LocationInput::Query(text.to_string());
            let result = resolve(&mock, &input, Side::Pickup).await;
            assert!(matches!(result, Err(ResolveError::EmptyInput)), "{text:?}");
        }
        assert_eq!(mock.search_count(), 0);
    }

    #[tokio::test]
    async fn unknown_address_is_not_found() {
        let mock = MockGeocoder::new();
        let input = LocationInput::Query("nowhere in particular".to_string());

        let result = resolve(&mock, &input, Side::Dropoff).await;
        match result {
            Err(ResolveError::NotFound { query }) => {
                assert_eq!(query, "nowhere in particular");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
