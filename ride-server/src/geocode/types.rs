//! Nominatim API response DTOs.
//!
//! These types map directly to the Nominatim JSON responses. Coordinates
//! arrive as strings, not numbers, and `display_name` can be absent, so
//! both quirks are handled at the parse site.

use serde::Deserialize;

/// One candidate place from a forward `/search` lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// Latitude as a decimal string, e.g. `"40.7127281"`.
    pub lat: String,

    /// Longitude as a decimal string.
    pub lon: String,

    /// Full human-readable place name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Response body from a reverse `/reverse` lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ReversePlace {
    /// Full human-readable address of the position.
    #[serde(default)]
    pub display_name: Option<String>,
}
