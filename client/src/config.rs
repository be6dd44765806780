use std::{env, fmt::Display, str::FromStr, time::Duration};

use common::paths;
use reqwest::Url;
use tracing::{info, warn};

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TOAST_MS: &str = "3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub login_path: String,
    pub toast_duration: Duration,
    pub http_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = try_load::<String>("JOBS_BASE_URL", DEFAULT_BASE_URL)?;
        let base_url = Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            key: "JOBS_BASE_URL",
            reason: e.to_string(),
        })?;
        let toast_ms: u64 = try_load("JOBS_TOAST_MS", DEFAULT_TOAST_MS)?;
        let http_timeout = match var("JOBS_HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse("JOBS_HTTP_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        Ok(Self {
            base_url,
            login_path: try_load("JOBS_LOGIN_PATH", paths::LOGIN)?,
            toast_duration: Duration::from_millis(toast_ms),
            http_timeout,
        })
    }

    /// Defaults pointed at an explicit backend.
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            login_path: paths::LOGIN.to_string(),
            toast_duration: Duration::from_millis(3000),
            http_timeout: None,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, &raw)
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}
