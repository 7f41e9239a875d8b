//! Report backend client configuration.
//!
//! The backend base URL has no default: a submission without one is a
//! configuration error, not a request to some guessed host.

use url::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the diagnosis report backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; submissions go to `{api_url}/api/diagnostico`.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Build a configuration from a base URL string.
    pub fn new(api_url: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_url("api_url", api_url)?,
            timeout_secs,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SST_API_URL` (required)
    /// - `SST_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("SST_API_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;
        let api_url = parse_url("SST_API_URL", &raw)?;

        let timeout_secs = match lookup("SST_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_TIMEOUT_SECS,
                        "invalid SST_TIMEOUT_SECS, using default"
                    );
                    DEFAULT_TIMEOUT_SECS
                }
            },
        };

        Ok(Self {
            api_url,
            timeout_secs,
        })
    }

    /// The full submission endpoint.
    pub fn submission_url(&self) -> String {
        format!("{}/api/diagnostico", self.api_url.as_str().trim_end_matches('/'))
    }
}

fn parse_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SST_API_URL environment variable is required")]
    MissingApiUrl,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
