//! Configuration module for environment variables and application settings

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Gateway the frontend talks to
    pub gateway: GatewayConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Job polling configuration
    pub polling: PollingConfig,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Per-request timeout for gateway calls
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The page state and login session are shared by every client, so this
    /// defaults to loopback. Binding a public address exposes the session.
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Delay between two job status checks
    pub interval: Duration,
    /// Wall-clock budget for a job, measured from the first status check
    pub timeout: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Missing or unparsable
    /// numbers fall back to their defaults; an invalid gateway URL is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_or = |key: &str, default: u64| -> u64 {
            lookup(key)
                .and_then(|value| u64::from_str(value.trim()).ok())
                .unwrap_or(default)
        };

        let base_url = lookup("MOVIEMATCH_API_BASE")
            .unwrap_or_else(|| "http://localhost:8000".to_string());
        let parsed = Url::parse(&base_url)
            .with_context(|| format!("MOVIEMATCH_API_BASE is not a valid URL: {}", base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "MOVIEMATCH_API_BASE must be an http(s) URL, got {}",
                base_url
            ));
        }

        let port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(5173);

        Ok(Self {
            gateway: GatewayConfig {
                base_url,
                request_timeout: Duration::from_secs(parse_or("HTTP_TIMEOUT_SECS", 10)),
            },

            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port,
            },

            polling: PollingConfig {
                interval: Duration::from_millis(parse_or("POLL_INTERVAL_MS", 1000)),
                timeout: Duration::from_secs(parse_or("POLL_TIMEOUT_SECS", 60)),
            },
        })
    }
}
