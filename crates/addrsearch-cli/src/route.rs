//! Driving-route summary via the directions endpoint.

use anyhow::Context;

use addrsearch_core::{AppConfig, Coordinate};
use addrsearch_geocode::DirectionsClient;

pub async fn run(config: &AppConfig, from: Coordinate, to: Coordinate) -> anyhow::Result<()> {
    let api_key = config
        .directions_api_key
        .as_deref()
        .context("ADDR_DIRECTIONS_API_KEY is not set")?;

    let client = DirectionsClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.directions_base_url,
    )
    .context("failed to construct directions client")?;

    let response = client.directions(from, to, "driving").await?;
    let Some(route) = response.routes.first() else {
        println!("no route found from {from} to {to}");
        return Ok(());
    };

    if let Some(summary) = response.route_summary() {
        #[allow(clippy::cast_precision_loss)]
        let km = summary.distance_meters as f64 / 1000.0;
        println!(
            "route: {km:.1} km, {} min, {} steps",
            summary.duration_seconds / 60,
            summary.step_count,
        );
    }
    for leg in &route.legs {
        println!("leg: {} ({})", leg.distance.text, leg.duration.text);
        for step in &leg.steps {
            println!("  - {} [{}]", step.html_instructions, step.distance.text);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn route_hits_the_configured_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/directions/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "routes": [],
                "status": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = AppConfig {
            geocode_api_key: "test-key".to_string(),
            geocode_base_url: server.uri(),
            directions_api_key: Some("test-key".to_string()),
            directions_base_url: server.uri(),
            debounce_ms: 10,
            request_timeout_secs: 5,
            result_limit: 10,
            log_level: "info".to_string(),
            user_agent: "addrsearch-test/0.1".to_string(),
        };
        let from = Coordinate { lat: 37.0, lon: -122.0 };
        let to = Coordinate { lat: 37.5, lon: -122.5 };
        run(&config, from, to).await.unwrap();
    }
}
