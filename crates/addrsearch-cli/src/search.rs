//! One-shot search driven through a real [`SearchSession`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use addrsearch_core::AppConfig;
use addrsearch_geocode::GeocodeClient;
use addrsearch_session::{highlight, Geocoder, SearchSession, SessionPhase};

/// Builds the geocode client from config, honoring `ADDR_GEOCODE_BASE_URL`.
pub(crate) fn geocode_client(config: &AppConfig) -> anyhow::Result<GeocodeClient> {
    GeocodeClient::with_base_url(
        &config.geocode_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        config.result_limit,
        &config.geocode_base_url,
    )
    .context("failed to construct geocode client")
}

pub async fn run(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let client = geocode_client(config)?;

    let session = SearchSession::new(
        Arc::new(client) as Arc<dyn Geocoder>,
        Duration::from_millis(config.debounce_ms),
    );
    let mut rx = session.subscribe();
    session.on_query_changed(query);

    let state = rx
        .wait_for(|s| matches!(s.phase, SessionPhase::Resolved | SessionPhase::Failed))
        .await
        .context("session closed before completing")?
        .clone();

    if let Some(error) = state.error {
        anyhow::bail!("search failed: {error}");
    }
    if state.results.is_empty() {
        println!("no matches for \"{}\"", query.trim());
        return Ok(());
    }
    for address in &state.results {
        println!(
            "{}  ({})",
            emphasize(&address.display_address, query.trim()),
            address.coordinate(),
        );
    }
    Ok(())
}

/// Renders the highlight spans as ANSI bold.
pub(crate) fn emphasize(text: &str, query: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in highlight(text, query) {
        out.push_str(&text[cursor..start]);
        out.push_str("\x1b[1m");
        out.push_str(&text[start..end]);
        out.push_str("\x1b[0m");
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_with_base_url(base_url: &str) -> AppConfig {
        AppConfig {
            geocode_api_key: "test-key".to_string(),
            geocode_base_url: base_url.to_string(),
            directions_api_key: Some("test-key".to_string()),
            directions_base_url: base_url.to_string(),
            debounce_ms: 10,
            request_timeout_secs: 5,
            result_limit: 10,
            log_level: "info".to_string(),
            user_agent: "addrsearch-test/0.1".to_string(),
        }
    }

    #[tokio::test]
    async fn search_hits_the_configured_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("q", "123 main street"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "place_id": "12345",
                    "display_name": "123 Main Street, Springfield",
                    "lat": "44.9",
                    "lon": "-93.2"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_with_base_url(&server.uri());
        run(&config, "123 main street").await.unwrap();
    }

    #[test]
    fn emphasize_wraps_matches_in_bold() {
        assert_eq!(
            emphasize("123 Main Street", "main"),
            "123 \x1b[1mMain\x1b[0m Street"
        );
    }

    #[test]
    fn emphasize_without_match_is_identity() {
        assert_eq!(emphasize("123 Main Street", "elm"), "123 Main Street");
    }
}
