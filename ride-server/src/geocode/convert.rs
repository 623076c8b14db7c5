//! Conversion from Nominatim wire types to domain types.

use crate::domain::{Coordinates, ResolvedPoint};

use super::error::GeocodeError;
use super::types::SearchHit;

/// Convert a forward-search response into a resolved point.
///
/// Takes the first candidate and ignores the rest. Coordinates arrive as
/// decimal strings; unparseable components read as 0.0 rather than failing
/// the lookup. A missing `display_name` falls back to the query text so the
/// caller always gets a label.
pub fn search_hits_to_point(
    query: &str,
    hits: Vec<SearchHit>,
) -> Result<ResolvedPoint, GeocodeError> {
    let Some(hit) = hits.into_iter().next() else {
        return Err(GeocodeError::NoResults);
    };

    let lat = hit.lat.parse().unwrap_or(0.0);
    let lon = hit.lon.parse().unwrap_or(0.0);

    let coords = Coordinates::new(lat, lon).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
        body: None,
    })?;

    let label = hit.display_name.unwrap_or_else(|| query.to_string());

    Ok(ResolvedPoint::new(coords, label))
}
