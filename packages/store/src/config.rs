//! Panel configuration — `admin.toml`.
//!
//! A small TOML file pointing the client at its backend:
//!
//! ```toml
//! [api]
//! base_url = "https://cms.example.org/api/v1"
//!
//! [branding]
//! site_name = "Site Admin"
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent
//! to the development defaults. The web bundle may also override the base
//! URL at compile time through the `CMS_API_ENDPOINT` environment variable.

use serde::{Deserialize, Serialize};

/// Backend used when no configuration is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api/v1";

/// Top-level configuration stored in `admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Display branding for the panel chrome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

fn default_site_name() -> String {
    "Site Admin".to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let config = AdminConfig::from_toml("").unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.branding.site_name, "Site Admin");
    }

    #[test]
    fn round_trip() {
        let config = AdminConfig {
            api: ApiConfig {
                base_url: "https://cms.example.org/api/v1".into(),
            },
            branding: BrandingConfig {
                site_name: "CSTD Admin".into(),
            },
        };
        let toml = config.to_toml().unwrap();
        let loaded = AdminConfig::from_toml(&toml).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AdminConfig::from_toml("[api]\nbase_url = \"https://x.example\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://x.example");
        assert_eq!(config.branding.site_name, "Site Admin");
    }
}
