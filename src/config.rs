// src/config.rs

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub notification_relay_url: String,
    pub site_url: String,
    pub site_name: String,
    pub site_author: String,
    pub notification_template: String,
    pub settings_refresh: Duration,
    pub seo_refresh: Duration,
    pub featured_projects_limit: u32,
    pub acknowledgement_delay: Duration,
}

impl ClientConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let url = |key: &'static str, value: String| {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(value.trim_end_matches('/').to_string())
            } else {
                Err(ConfigError::Invalid { key, value })
            }
        };
        let parsed = |key: &'static str, default: &str| parse_or(get(key), key, default);

        Ok(Self {
            api_base_url: url("API_BASE_URL", required("API_BASE_URL")?)?,
            notification_relay_url: required("NOTIFICATION_RELAY_URL")
                .and_then(|v| url("NOTIFICATION_RELAY_URL", v))?,
            site_url: url(
                "SITE_URL",
                get("SITE_URL").unwrap_or_else(|| "http://localhost:3000".to_string()),
            )?,
            site_name: get("SITE_NAME").unwrap_or_else(|| "Portfolio".to_string()),
            site_author: get("SITE_AUTHOR").unwrap_or_default(),
            notification_template: get("NOTIFICATION_TEMPLATE")
                .unwrap_or_else(|| "table".to_string()),
            settings_refresh: Duration::from_secs(parsed("SETTINGS_REFRESH_SECS", "300")?),
            seo_refresh: Duration::from_secs(parsed("SEO_REFRESH_SECS", "600")?),
            featured_projects_limit: parse_or(
                get("FEATURED_PROJECTS_LIMIT"),
                "FEATURED_PROJECTS_LIMIT",
                "3",
            )?,
            acknowledgement_delay: Duration::from_secs(parsed("ACKNOWLEDGEMENT_DELAY_SECS", "5")?),
        })
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { key, value })
}
