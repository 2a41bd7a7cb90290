//! Runtime configuration
//!
//! Read from environment variables (the host loads `.env` first):
//!
//! | Variable                      | Meaning                               |
//! |-------------------------------|---------------------------------------|
//! | `CULINARY_BRAND_API_URL`      | Base URL of the brand data service    |
//! | `CULINARY_BRAND_API_KEY`      | Project API key sent as `apikey`      |
//! | `CULINARY_ACCESS_TOKEN`       | Session bearer token                  |
//! | `CULINARY_HTTP_TIMEOUT_SECS`  | Request timeout (default 30)          |
//! | `CULINARY_DATA_DIR`           | Directory holding the settings DB     |

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ENV_BRAND_API_URL: &str = "CULINARY_BRAND_API_URL";
pub const ENV_BRAND_API_KEY: &str = "CULINARY_BRAND_API_KEY";
pub const ENV_ACCESS_TOKEN: &str = "CULINARY_ACCESS_TOKEN";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CULINARY_HTTP_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "CULINARY_DATA_DIR";

/// Default request timeout for the brand service
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Application directory name under the platform data dir
pub const APP_DIR_NAME: &str = "culinaryseoul";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Connection settings for the external brand data service
#[derive(Debug, Clone, PartialEq)]
pub struct BrandServiceConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl BrandServiceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            access_token: None,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// `None` when no brand service URL is configured
    pub brand_service: Option<BrandServiceConfig>,
    pub data_dir: PathBuf,
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: ENV_HTTP_TIMEOUT_SECS,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_HTTP_TIMEOUT,
        };

        let brand_service = match non_empty(ENV_BRAND_API_URL) {
            Some(raw) => {
                let base_url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl {
                    var: ENV_BRAND_API_URL,
                    value: raw.clone(),
                })?;
                Some(BrandServiceConfig {
                    base_url,
                    api_key: non_empty(ENV_BRAND_API_KEY),
                    access_token: non_empty(ENV_ACCESS_TOKEN),
                    timeout,
                })
            }
            None => None,
        };

        let data_dir = non_empty(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Ok(Self {
            brand_service,
            data_dir,
        })
    }
}

/// Platform data directory for the dashboard
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
