use thiserror::Error;

use crate::app_config::AppConfig;

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let geocode_api_key = require("ADDR_GEOCODE_API_KEY")?;
    let geocode_base_url = or_default("ADDR_GEOCODE_BASE_URL", "https://us1.locationiq.com/v1");
    let directions_api_key = lookup("ADDR_DIRECTIONS_API_KEY").ok();
    let directions_base_url = or_default(
        "ADDR_DIRECTIONS_BASE_URL",
        "https://maps.googleapis.com/maps/api",
    );
    let debounce_ms = parse_u64("ADDR_DEBOUNCE_MS", "1000")?;
    let request_timeout_secs = parse_u64("ADDR_REQUEST_TIMEOUT_SECS", "30")?;
    let result_limit = parse_u32("ADDR_RESULT_LIMIT", "10")?;
    let log_level = or_default("ADDR_LOG_LEVEL", "info");
    let user_agent = or_default("ADDR_USER_AGENT", "addrsearch/0.1 (address-search)");

    Ok(AppConfig {
        geocode_api_key,
        geocode_base_url,
        directions_api_key,
        directions_base_url,
        debounce_ms,
        request_timeout_secs,
        result_limit,
        log_level,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
