//! Fare and ETA estimation.
//!
//! Every provider shares one fare formula; profiles differ only in their
//! surge multiplier and pickup speed. Estimates are deterministic: the same
//! distance and profile always produce the same quote.

use crate::domain::ProviderProfile;

/// Base fare in USD, shared by every provider.
const BASE_FARE_USD: f64 = 2.0;

/// Per-kilometre rate in USD, shared by every provider.
const PER_KM_USD: f64 = 1.2;

/// Flat booking fee in USD, shared by every provider.
const BOOKING_FEE_USD: f64 = 1.0;

/// Minimum ETA in minutes. Dispatch overhead means no car arrives sooner,
/// however short the trip.
const MIN_ETA_MINUTES: i64 = 2;

/// A provider's price and ETA for a given distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Price in USD, rounded to the nearest cent.
    pub estimate_usd: f64,

    /// Minutes until pickup, never below the two-minute dispatch floor.
    pub eta_minutes: i64,
}

/// Estimate price and ETA for a trip of `distance_km` under `profile`.
///
/// Price is `(base + km * rate + booking) * surge`, rounded to the nearest
/// cent. ETA is the distance over the profile's pickup speed, rounded to
/// whole minutes, floored at the dispatch minimum. Both are non-decreasing
/// in distance for a fixed profile.
pub fn estimate(distance_km: f64, profile: &ProviderProfile) -> Estimate {
    let raw = (BASE_FARE_USD + distance_km * PER_KM_USD + BOOKING_FEE_USD) * profile.surge_multiplier;

    let eta = (distance_km / profile.eta_km_per_min).round() as i64;

    Estimate {
        estimate_usd: round_cents(raw),
        eta_minutes: eta.max(MIN_ETA_MINUTES),
    }
}

/// Round an amount to the nearest cent.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::PROVIDERS;
    use proptest::prelude::*;

    proptest! {
        /// Estimates never go down as the trip gets longer
        #[test]
        fn monotone_in_distance(d1 in 0.0..20000.0f64, d2 in 0.0..20000.0f64) {
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };

            for profile in PROVIDERS {
                let a = estimate(near, profile);
                let b = estimate(far, profile);
                prop_assert!(a.estimate_usd <= b.estimate_usd, "{}", profile.name);
                prop_assert!(a.eta_minutes <= b.eta_minutes, "{}", profile.name);
            }
        }

        /// Estimates are at least the surged base cost, and whole cents
        #[test]
        fn bounded_below_and_cent_aligned(d in 0.0..20000.0f64) {
            for profile in PROVIDERS {
                let est = estimate(d, profile);

                let floor = round_cents((BASE_FARE_USD + BOOKING_FEE_USD) * profile.surge_multiplier);
                prop_assert!(est.estimate_usd >= floor);
                prop_assert!(est.eta_minutes >= 2);

                // Whole number of cents
                let cents = est.estimate_usd * 100.0;
                prop_assert!((cents - cents.round()).abs() < 1e-6);
            }
        }
    }
}
