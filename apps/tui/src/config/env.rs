use crate::api::DEFAULT_ENDPOINT;
use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "covid-dashboard.log";

/// Runtime settings resolved from `.env` and the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub log_filter: String,
    pub log_file: PathBuf,
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    resolve(|key| env::var(key).ok())
}

fn resolve(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::eyre::Result<AppConfig> {
    let endpoint = lookup("COVID_API_URL")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let url = reqwest::Url::parse(&endpoint)
        .wrap_err_with(|| format!("Invalid stats endpoint: {endpoint}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(eyre!("Stats endpoint must be http(s): {endpoint}"));
    }

    let log_filter = lookup("DASHBOARD_LOG").unwrap_or_else(|| {
        if lookup("DEBUG").is_some() {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    });

    let log_file = lookup("DASHBOARD_LOG_FILE")
        .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

    Ok(AppConfig {
        endpoint,
        log_filter,
        log_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_public_feed() -> color_eyre::eyre::Result<()> {
        let config = resolve(lookup_from(&[]))?;

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        Ok(())
    }

    #[test]
    fn environment_overrides_apply() -> color_eyre::eyre::Result<()> {
        let config = resolve(lookup_from(&[
            ("COVID_API_URL", "http://127.0.0.1:8080/latest"),
            ("DEBUG", "1"),
            ("DASHBOARD_LOG_FILE", "/tmp/dash.log"),
        ]))?;

        assert_eq!(config.endpoint, "http://127.0.0.1:8080/latest");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_file, PathBuf::from("/tmp/dash.log"));
        Ok(())
    }

    #[test]
    fn explicit_filter_wins_over_debug() -> color_eyre::eyre::Result<()> {
        let config = resolve(lookup_from(&[("DEBUG", "1"), ("DASHBOARD_LOG", "warn")]))?;
        assert_eq!(config.log_filter, "warn");
        Ok(())
    }

    #[test]
    fn rejects_non_http_endpoints() {
        assert!(resolve(lookup_from(&[("COVID_API_URL", "ftp://example.com/x")])).is_err());
        assert!(resolve(lookup_from(&[("COVID_API_URL", "not a url")])).is_err());
    }
}
