//! Provider trip-link generation.
//!
//! Builds the URLs that hand a resolved trip over to a provider's app or
//! website. The builder itself has no per-provider branches: everything
//! provider-specific lives in the profile's [`LinkTemplate`].

use crate::domain::{LinkTemplate, ResolvedPoint};

/// The pair of URLs generated for one provider and one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLinks {
    /// Opens the provider's native app when installed.
    pub app: String,

    /// Browser fallback for the same trip.
    pub web: String,
}

/// Build both trip links for a template.
///
/// App and web links share one query string; a provider without a custom
/// app scheme reuses its web URL as the app link.
pub fn build_links(template: &LinkTemplate, from: &ResolvedPoint, to: &ResolvedPoint) -> TripLinks {
    let query = encode_query(template, from, to);

    let web = format!("{}?{}", template.web_base, query);
    let app = match template.app_base {
        Some(base) => format!("{}?{}", base, query),
        None => web.clone(),
    };

    TripLinks { app, web }
}

/// Encode the query string for a trip.
///
/// Fixed parameters come first, then pickup and dropoff coordinates under
/// the template's parameter stems, as `stem[latitude]` and
/// `stem[longitude]`. Keys and values are percent-encoded.
fn encode_query(template: &LinkTemplate, from: &ResolvedPoint, to: &ResolvedPoint) -> String {
    let mut params: Vec<(String, String)> = Vec::with_capacity(template.fixed_params.len() + 4);

    for (key, value) in template.fixed_params {
        params.push(((*key).to_string(), (*value).to_string()));
    }

    params.push((
        format!("{}[latitude]", template.pickup_stem),
        from.coords.lat().to_string(),
    ));
    params.push((
        format!("{}[longitude]", template.pickup_stem),
        from.coords.lon().to_string(),
    ));
    params.push((
        format!("{}[latitude]", template.dropoff_stem),
        to.coords.lat().to_string(),
    ));
    params.push((
        format!("{}[longitude]", template.dropoff_stem),
        to.coords.lon().to_string(),
    ));

    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
