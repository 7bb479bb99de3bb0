use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://markerapi.com/api/v2/trademarks";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

pub const USERNAME_VAR: &str = "MARKER_API_USERNAME";
pub const PASSWORD_VAR: &str = "MARKER_API_PASSWORD";
pub const BASE_URL_VAR: &str = "MARKER_API_BASE_URL";
pub const BIND_ADDR_VAR: &str = "MARKSCOUT_BIND_ADDR";

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Process configuration. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub base_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = get_required(&lookup, USERNAME_VAR)?;
        let password = get_required(&lookup, PASSWORD_VAR)?;

        let base_url = get_or_default(&lookup, BASE_URL_VAR, DEFAULT_BASE_URL);
        let base_url = base_url.trim_end_matches('/').to_string();

        let bind_addr = get_or_default(&lookup, BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        Ok(Config {
            credentials: Credentials { username, password },
            base_url,
            bind_addr,
        })
    }
}

fn get_required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key)),
    }
}

fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
