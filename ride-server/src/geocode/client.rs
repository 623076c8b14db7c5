//! Nominatim HTTP client.
//!
//! Provides async methods for forward and reverse geocoding against a
//! Nominatim instance. Handles the User-Agent requirement and the string
//! coordinate encoding of the API.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::{Coordinates, ResolvedPoint};

use super::Geocoder;
use super::convert;
use super::error::GeocodeError;
use super::types::{ReversePlace, SearchHit};
use async_trait::async_trait;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent. Nominatim rejects anonymous clients.
const DEFAULT_USER_AGENT: &str = "ride-compare/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API (defaults to the public instance)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NominatimConfig {
    /// Create a config with the default public instance settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Nominatim API client.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();

        let agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::ApiError {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Forward-geocode a free-text query.
    ///
    /// Requests a single candidate and takes it. A missing `display_name`
    /// falls back to the query text so the caller always gets a label.
    pub async fn lookup(&self, query: &str) -> Result<ResolvedPoint, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let hits: Vec<SearchHit> = serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        convert::search_hits_to_point(query, hits)
    }

    /// Reverse-geocode a position to an address.
    ///
    /// A missing `display_name` falls back to `"lat,lon"`.
    pub async fn reverse_lookup(&self, coords: Coordinates) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.lat().to_string()),
                ("lon", coords.lon().to_string()),
                ("format", "json".to_string()),
                ("zoom", "16".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let place: ReversePlace = serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(place
            .display_name
            .unwrap_or_else(|| format!("{},{}", coords.lat(), coords.lon())))
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn search(&self, query: &str) -> Result<ResolvedPoint, GeocodeError> {
        self.lookup(query).await
    }

    async fn reverse(&self, coords: Coordinates) -> Result<String, GeocodeError> {
        self.reverse_lookup(coords).await
    }
}
