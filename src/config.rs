//! Gateway configuration parsed from environment variables.

use std::path::PathBuf;

use crate::error::GatewayError;
use crate::proxy::{ProxyRule, default_rules};

pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
/// The backend mounts its auth routes at the root, so `/api` is dropped.
pub const DEFAULT_STRIP_API: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    /// Built client bundle (`index.html`, wasm, css).
    pub static_dir: PathBuf,
    /// Proxy rules in match order.
    pub rules: Vec<ProxyRule>,
}

impl GatewayConfig {
    /// Build typed gateway config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 5173
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `STATIC_DIR`: default `client/dist`
    /// - `PROXY_STRIP_API`: strip `/api` before forwarding, default true
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| GatewayError::Config(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let backend_url = lookup("BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(GatewayError::Config(format!("BACKEND_URL must be http(s): {backend_url}")));
        }

        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_owned()));

        let strip_api = match lookup("PROXY_STRIP_API") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| GatewayError::Config(format!("invalid PROXY_STRIP_API: {raw}")))?,
            None => DEFAULT_STRIP_API,
        };

        Ok(Self { port, backend_url, static_dir, rules: default_rules(strip_api) })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
