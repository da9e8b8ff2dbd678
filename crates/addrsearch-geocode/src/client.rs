//! HTTP client for the forward-geocoding endpoint.
//!
//! Wraps `reqwest` with typed errors, API key management, and mapping from
//! raw provider records into [`AddressModel`]. Records whose coordinates
//! fail to parse are dropped individually; the batch proceeds.

use std::time::Duration;

use reqwest::{Client, Url};

use addrsearch_core::{AddressModel, Coordinate};

use crate::error::GeocodeError;
use crate::types::PlaceRecord;

const DEFAULT_BASE_URL: &str = "https://us1.locationiq.com/v1/";

/// Client for the forward-geocoding REST endpoint.
///
/// Manages the HTTP client, API key, base URL, and result limit. Use
/// [`GeocodeClient::new`] for production or [`GeocodeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: Url,
    limit: u32,
}

impl GeocodeClient {
    /// Creates a new client pointed at the production geocoding API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        limit: u32,
    ) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, limit, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        limit: u32,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends the
        // endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            limit,
        })
    }

    /// Searches the geocoding endpoint for `query` and maps the response
    /// into domain models, preserving provider order.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Status`] on a non-2xx response.
    /// - [`GeocodeError::Http`] on network failure or timeout.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected JSON
    ///   array.
    pub async fn search(&self, query: &str) -> Result<Vec<AddressModel>, GeocodeError> {
        let url = self.search_url(query)?;
        tracing::debug!(query, "issuing geocode request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let records: Vec<PlaceRecord> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        Ok(records.into_iter().filter_map(map_record).collect())
    }

    /// Builds the full search URL with percent-encoded query parameters.
    fn search_url(&self, query: &str) -> Result<Url, GeocodeError> {
        let mut url = self
            .base_url
            .join("search.php")
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }
}

/// Maps one provider record into an [`AddressModel`].
///
/// Returns `None` when either coordinate fails to parse or falls outside its
/// valid degree range; the record is dropped with a warning and the rest of
/// the batch proceeds.
fn map_record(record: PlaceRecord) -> Option<AddressModel> {
    let parsed = record
        .lat
        .parse::<f64>()
        .and_then(|lat| record.lon.parse::<f64>().map(|lon| Coordinate { lat, lon }));
    match parsed {
        Ok(coord) if coord.in_range() => Some(AddressModel {
            id: record.place_id,
            display_address: record.display_name,
            latitude: coord.lat,
            longitude: coord.lon,
        }),
        Ok(coord) => {
            tracing::warn!(place_id = %record.place_id, %coord, "dropping record with out-of-range coordinates");
            None
        }
        Err(e) => {
            tracing::warn!(place_id = %record.place_id, error = %e, "dropping record with unparsable coordinates");
            None
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
