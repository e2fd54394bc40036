// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is read from a TOML file, `$MURMUR_CONFIG` or
//! `<config dir>/murmur/config.toml`, and every field is optional:
//! - `base_url`: where the backend lives (default `http://127.0.0.1:8000`)
//! - `reconnect_delay_ms`: pause between push-channel reconnects
//! - `sort_by_timestamp`: sort fetched lists instead of trusting server order
//! - `request_timeout_secs`: timeout for pull-channel requests
//!
//! The server URL is resolved as `--url`, then `$MURMUR_API_URL`, then the
//! file, then the default.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use murmur_core::protocol::{FETCH_PATH, PUSH_PATH, SEND_PATH};

use crate::env;
use crate::error::{Error, Result};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const CONFIG_DIR_NAME: &str = "murmur";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base URL of the backend. Both channels are derived from it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Delay between a push-channel disconnect and the next attempt (default: 2000).
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Sort fetched messages by timestamp (default: false, keep server order).
    #[serde(default)]
    pub sort_by_timestamp: bool,
    /// Timeout for fetch and send requests in seconds (default: 10).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    2000
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            sort_by_timestamp: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from the given file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would spin or fail every request.
    fn validate(&self) -> Result<()> {
        if self.reconnect_delay_ms == 0 {
            return Err(Error::Config(
                "reconnect_delay_ms must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads configuration from the given file, or the defaults if it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the effective configuration for a command.
    ///
    /// An explicit `--config` path must exist; the environment and default
    /// paths are optional.
    pub fn resolve(config_flag: Option<&Path>, url_flag: Option<String>) -> Result<Self> {
        let config = match config_flag {
            Some(path) => Self::load(path)?,
            None => match env::config_path().or_else(default_config_path) {
                Some(path) => Self::load_or_default(&path)?,
                None => Config::default(),
            },
        };
        Ok(config.with_base_url(env::api_url()).with_base_url(url_flag))
    }

    /// Returns a copy with `base_url` replaced when `url` is given.
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.base_url = url;
        }
        self
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Derives the endpoint URLs from `base_url`.
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::from_base(&self.base_url)
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// The three URLs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Fetch-all (GET).
    pub fetch: Url,
    /// Send-one (POST).
    pub send: Url,
    /// Push subscription (WebSocket).
    pub push: Url,
}

impl Endpoints {
    /// Builds endpoints under `base`.
    ///
    /// `base` must be an http or https URL; it may carry a path prefix, as
    /// when the backend sits behind a reverse proxy. The push URL uses `ws`
    /// or `wss` to match.
    pub fn from_base(base: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidUrl {
            url: base.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(base.trim()).map_err(|e| invalid(&e.to_string()))?;
        let push_scheme = match parsed.scheme() {
            "http" => "ws",
            "https" => "wss",
            _ => return Err(invalid("unsupported scheme")),
        };
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query strings and fragments are not supported"));
        }

        let root = parsed.as_str().trim_end_matches('/');
        let join = |path: &str| {
            Url::parse(&format!("{}{}", root, path)).map_err(|e| invalid(&e.to_string()))
        };

        let fetch = join(FETCH_PATH)?;
        let send = join(SEND_PATH)?;
        let mut push = join(PUSH_PATH)?;
        push.set_scheme(push_scheme)
            .map_err(|_| invalid("cannot derive push URL"))?;

        Ok(Endpoints { fetch, send, push })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
