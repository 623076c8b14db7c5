//! Ride provider profiles.

/// How a provider's trip links are assembled.
///
/// Providers differ in where the coordinates go, not in how they are
/// encoded: each declares a base URL per surface and the query-parameter
/// stems its app understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTemplate {
    /// Custom-scheme base for the native app, e.g. `lyft://ridetype`.
    /// `None` means the web URL doubles as the app link.
    pub app_base: Option<&'static str>,

    /// Web base URL, e.g. `https://ride.lyft.com/`.
    pub web_base: &'static str,

    /// Fixed query parameters emitted before the coordinates.
    pub fixed_params: &'static [(&'static str, &'static str)],

    /// Query-parameter stem for the pickup coordinates.
    pub pickup_stem: &'static str,

    /// Query-parameter stem for the dropoff coordinates.
    pub dropoff_stem: &'static str,
}

/// Per-provider pricing and link configuration.
///
/// Profiles are read-only after process start and shared by every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderProfile {
    /// Display name; also the `provider` field of every quote.
    pub name: &'static str,

    /// Demand-pricing scalar applied to the shared fare formula.
    pub surge_multiplier: f64,

    /// Pickup speed in km per minute; trip distance divided by this gives
    /// the ETA before the dispatch floor is applied.
    pub eta_km_per_min: f64,

    /// Link assembly rules for this provider.
    pub links: LinkTemplate,
}

/// The built-in provider table.
///
/// Ranking is stable, so providers quoting the same price keep this order.
pub const PROVIDERS: &[ProviderProfile] = &[
    ProviderProfile {
        name: "Uber",
        surge_multiplier: 1.0,
        eta_km_per_min: 0.8,
        links: LinkTemplate {
            app_base: None,
            web_base: "https://m.uber.com/ul/",
            fixed_params: &[("action", "setPickup")],
            pickup_stem: "pickup",
            dropoff_stem: "dropoff",
        },
    },
    ProviderProfile {
        name: "Lyft",
        surge_multiplier: 0.95,
        eta_km_per_min: 0.75,
        links: LinkTemplate {
            app_base: Some("lyft://ridetype"),
            web_base: "https://ride.lyft.com/",
            fixed_params: &[("id", "lyft")],
            pickup_stem: "pickup",
            dropoff_stem: "destination",
        },
    },
];
