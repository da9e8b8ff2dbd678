/// Runtime configuration for the addrsearch front-end, read from the
/// environment by [`crate::load_app_config`].
#[derive(Clone)]
pub struct AppConfig {
    pub geocode_api_key: String,
    pub geocode_base_url: String,
    pub directions_api_key: Option<String>,
    pub directions_base_url: String,
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub result_limit: u32,
    pub log_level: String,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("geocode_api_key", &"[redacted]")
            .field("geocode_base_url", &self.geocode_base_url)
            .field(
                "directions_api_key",
                &self.directions_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("directions_base_url", &self.directions_base_url)
            .field("debounce_ms", &self.debounce_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("result_limit", &self.result_limit)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
