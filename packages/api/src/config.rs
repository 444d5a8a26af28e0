//! # Client configuration: `rulehub.toml`
//!
//! The desktop client reads an optional TOML file from the platform config
//! directory (`<config_dir>/rulehub/rulehub.toml`, see [`ClientConfig::path`]).
//!
//! ## Structure
//!
//! ```toml
//! [server]
//! base_url = "https://api.rulehub.dev"
//!
//! [http]
//! timeout_secs = 15    # every request fails with ApiError::Timeout after this
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ServerConfig`] | Base URL of the Rulehub service. |
//! | [`HttpConfig`] | Request timeout, default **15 seconds**. |
//!
//! Every section and key is optional, so a missing or empty file is equivalent
//! to the default configuration. `RULEHUB_SERVER_URL` overrides the base URL.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ServerConfig::base_url`].
pub const SERVER_URL_ENV: &str = "RULEHUB_SERVER_URL";

/// Top-level configuration stored in `rulehub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.rulehub.dev".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                base_url: base_url.into(),
            },
            http: HttpConfig::default(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.server.base_url.trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "rulehub.toml"
    }

    /// Location of the config file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rulehub").join(Self::filename()))
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the config file from [`ClientConfig::path`], then apply the
    /// environment override. A missing file is the default configuration; a
    /// malformed one is logged and ignored.
    pub fn load_or_default() -> Self {
        let mut config = match Self::path() {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(text) => Self::from_toml(&text).unwrap_or_else(|e| {
                    tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
                Err(e) => {
                    tracing::warn!("Could not read {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        };
        config.apply_env_override(std::env::var(SERVER_URL_ENV).ok());
        config
    }

    fn apply_env_override(&mut self, server_url: Option<String>) {
        if let Some(url) = server_url.filter(|u| !u.trim().is_empty()) {
            self.server.base_url = url.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.http.timeout_secs, 15);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ClientConfig::from_toml("[http]\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn toml_roundtrip() {
        let config = ClientConfig::new("http://localhost:8080").with_timeout_secs(5);
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080//");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn env_override_ignores_blank_values() {
        let mut config = ClientConfig::default();
        config.apply_env_override(Some("   ".into()));
        assert_eq!(config.server, ServerConfig::default());

        config.apply_env_override(Some(" http://staging ".into()));
        assert_eq!(config.server.base_url, "http://staging");
    }
}
