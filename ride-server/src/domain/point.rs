//! Geographic point types.

/// Error returned when constructing out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A validated geographic position in decimal degrees.
///
/// Latitude lies in [-90, 90], longitude in [-180, 180], and both components
/// are finite. This type guarantees that any `Coordinates` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use ride_server::domain::Coordinates;
///
/// let nyc = Coordinates::new(40.7128, -74.0060).unwrap();
/// assert_eq!(nyc.lat(), 40.7128);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinates::new(90.5, 0.0).is_err());
///
/// // Non-finite components are rejected
/// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Construct a coordinate pair, checking ranges.
    ///
    /// Latitude must be within [-90, 90] and longitude within [-180, 180];
    /// both must be finite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinates {
                reason: "components must be finite",
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Coordinates { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// A resolved trip endpoint: a position plus the label shown to the user.
///
/// Produced by location resolution and never mutated afterwards; each value
/// lives only as long as the request that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPoint {
    pub coords: Coordinates,
    pub label: String,
}

impl ResolvedPoint {
    pub fn new(coords: Coordinates, label: impl Into<String>) -> Self {
        ResolvedPoint {
            coords,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_positions() {
        assert!(Coordinates::new(40.7128, -74.0060).is_ok());
        assert!(Coordinates::new(51.5074, -0.1278).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
        assert!(Coordinates::new(-33.8688, 151.2093).is_ok());
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(Coordinates::new(90.0, 0.0).is_ok());
        assert!(Coordinates::new(-90.0, 0.0).is_ok());
        assert!(Coordinates::new(0.0, 180.0).is_ok());
        assert!(Coordinates::new(0.0, -180.0).is_ok());
        assert!(Coordinates::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(Coordinates::new(90.0001, 0.0).is_err());
        assert!(Coordinates::new(-91.0, 0.0).is_err());
        assert!(Coordinates::new(1600.0, 41.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(Coordinates::new(0.0, 180.0001).is_err());
        assert!(Coordinates::new(0.0, -200.0).is_err());
    }

    #[test]
    fn rejects_non_finite_components() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
        assert!(Coordinates::new(f64::INFINITY, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn accessors_return_components() {
        let c = Coordinates::new(40.7128, -74.0060).unwrap();
        assert_eq!(c.lat(), 40.7128);
        assert_eq!(c.lon(), -74.0060);
    }

    #[test]
    fn resolved_point_keeps_label() {
        let c = Coordinates::new(40.7306, -73.9352).unwrap();
        let point = ResolvedPoint::new(c, "Brooklyn");
        assert_eq!(point.label, "Brooklyn");
        assert_eq!(point.coords, c);
    }
}
