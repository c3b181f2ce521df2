//! # Client configuration: `sanarte.toml`
//!
//! Defines the TOML configuration the web binary embeds at build time
//! (filename: [`ClientConfig::filename`] = `"sanarte.toml"`). It tells the
//! client where the backend lives and how long to linger on success messages
//! before redirecting.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"   # backend origin, no trailing /api
//!
//! [ui]
//! redirect_delay_ms = 2000             # pause before post-login/register redirect
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML parsing, the build-time `BACKEND_URL` override, and the canonical filename. |
//! | [`ApiConfig`] | Backend section: `base_url`. |
//! | [`UiConfig`] | UI section: `redirect_delay_ms`, default **2000 ms**. |
//!
//! All structs default every field, so a missing or empty file is equivalent
//! to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `sanarte.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend REST API. Endpoint paths (`/api/...`) are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Delay in milliseconds between a success message and the redirect.
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_redirect_delay() -> u64 {
    2000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "sanarte.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse an embedded config and apply an optional backend override.
    ///
    /// An empty override is ignored, mirroring an unset environment variable.
    pub fn load(embedded: &str, backend_url: Option<&str>) -> Result<Self, toml::de::Error> {
        let config = Self::from_toml(embedded)?;
        Ok(match backend_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.ui.redirect_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.redirect_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml("[ui]\nredirect_delay_ms = 500\n").unwrap();
        assert_eq!(config.ui.redirect_delay_ms, 500);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_load_applies_override() {
        let embedded = "[api]\nbase_url = \"https://api.sanarte.example\"\n";

        let plain = ClientConfig::load(embedded, None).unwrap();
        assert_eq!(plain.api.base_url, "https://api.sanarte.example");

        let overridden = ClientConfig::load(embedded, Some("http://127.0.0.1:5000")).unwrap();
        assert_eq!(overridden.api.base_url, "http://127.0.0.1:5000");

        let blank = ClientConfig::load(embedded, Some("  ")).unwrap();
        assert_eq!(blank.api.base_url, "https://api.sanarte.example");
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        assert!(ClientConfig::load("[api\nbase_url = 1", None).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("https://example.org");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
