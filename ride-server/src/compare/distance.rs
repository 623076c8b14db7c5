//! Great-circle distance between trip endpoints.

use crate::domain::Coordinates;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
///
/// Haversine formula on a spherical Earth. The result is symmetric in its
/// arguments and exactly zero for identical points.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push h past 1 for near-antipodal pairs, which would
    // make the sqrt below NaN.
    let h = h.min(1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn zero_for_identical_points() {
        let p = coords(40.7128, -74.0060);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn manhattan_to_brooklyn() {
        let manhattan = coords(40.7128, -74.0060);
        let brooklyn = coords(40.7306, -73.9352);

        let d = haversine_km(manhattan, brooklyn);
        assert!((d - 6.2863).abs() < 0.001, "got {d}");
    }

    #[test]
    fn london_to_paris() {
        let london = coords(51.5074, -0.1278);
        let paris = coords(48.8566, 2.3522);

        // Roughly 343-344 km
        let d = haversine_km(london, paris);
        assert!((d - 343.5).abs() < 1.0, "got {d}");
    }

    #[test]
    fn quarter_circumference_along_equator() {
        let origin = coords(0.0, 0.0);
        let quarter = coords(0.0, 90.0);

        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        let d = haversine_km(origin, quarter);
        assert!((d - expected).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn antipodal_points_are_finite() {
        let a = coords(0.0, 0.0);
        let b = coords(0.0, 180.0);

        let d = haversine_km(a, b);
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1.0, "got {d}");
    }
}
