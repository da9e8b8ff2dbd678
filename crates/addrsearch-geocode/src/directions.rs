//! HTTP client for the directions endpoint.
//!
//! Only the optional route-summary feature uses this; the navigation-launch
//! flow composes URIs locally and never calls it.

use std::time::Duration;

use reqwest::{Client, Url};

use addrsearch_core::Coordinate;

use crate::error::DirectionsError;
use crate::types::DirectionsResponse;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// Client for the directions REST endpoint.
pub struct DirectionsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl DirectionsClient {
    /// Creates a new client pointed at the production directions API.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, DirectionsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DirectionsError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| DirectionsError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches driving (or other `mode`) directions between two points.
    ///
    /// # Errors
    ///
    /// - [`DirectionsError::Status`] on a non-2xx response.
    /// - [`DirectionsError::Api`] when the body `status` field is not `"OK"`.
    /// - [`DirectionsError::Http`] on network failure or timeout.
    /// - [`DirectionsError::Deserialize`] if the body does not match the
    ///   expected envelope.
    pub async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: &str,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let url = self.directions_url(origin, destination, mode)?;
        tracing::debug!(%origin, %destination, mode, "issuing directions request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectionsError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Deserialize {
                context: format!("directions({origin} -> {destination})"),
                source: e,
            })?;

        if parsed.status != "OK" {
            return Err(DirectionsError::Api(parsed.status));
        }
        Ok(parsed)
    }

    fn directions_url(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: &str,
    ) -> Result<Url, DirectionsError> {
        let mut url = self
            .base_url
            .join("directions/json")
            .map_err(|e| DirectionsError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("origin", &origin.to_string())
            .append_pair("destination", &destination.to_string())
            .append_pair("mode", mode)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}
