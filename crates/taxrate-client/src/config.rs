//! Taxrate API client configuration.
//!
//! Defaults point at the production endpoint; override via environment
//! variables or explicit construction for sandbox and testing. Secrets ride
//! in [`zeroize::Zeroizing`] buffers and never appear in `Debug` output.

use url::Url;
use zeroize::Zeroizing;

/// Production REST endpoint.
pub const PRODUCTION_URL: &str = "https://rest.api.taxrate.io";

/// Sandbox REST endpoint. Sandbox accounts are separate from production.
pub const SANDBOX_URL: &str = "https://sandbox.api.taxrate.io";

/// How a call authenticates. Exactly one scheme is active per call.
#[derive(Clone)]
pub enum Credentials {
    /// Account id / license key pair, sent as HTTP Basic.
    Basic {
        /// Account identifier.
        account_id: Zeroizing<String>,
        /// License key for the account.
        license_key: Zeroizing<String>,
    },
    /// OAuth-style bearer token.
    Bearer(Zeroizing<String>),
    /// No authentication, for endpoints like `ping` that allow it.
    None,
}

impl Credentials {
    /// Basic credentials from an account id and license key.
    pub fn basic(account_id: impl Into<String>, license_key: impl Into<String>) -> Self {
        Credentials::Basic {
            account_id: Zeroizing::new(account_id.into()),
            license_key: Zeroizing::new(license_key.into()),
        }
    }

    /// Bearer token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(Zeroizing::new(token.into()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { account_id, .. } => f
                .debug_struct("Basic")
                .field("account_id", &account_id.as_str())
                .field("license_key", &"[REDACTED]")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Credentials::None => f.write_str("None"),
        }
    }
}

/// Configuration for connecting to the Taxrate API.
#[derive(Debug, Clone)]
pub struct TaxrateConfig {
    /// Base URL of the REST endpoint.
    pub base_url: Url,
    /// Credentials attached to every call.
    pub credentials: Credentials,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl TaxrateConfig {
    /// Configuration against the production endpoint.
    pub fn production(credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("production", PRODUCTION_URL)?,
            credentials,
            timeout_secs: 30,
        })
    }

    /// Configuration against the sandbox endpoint.
    pub fn sandbox(credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("sandbox", SANDBOX_URL)?,
            credentials,
            timeout_secs: 30,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `TAXRATE_BASE_URL` (default: production endpoint)
    /// - `TAXRATE_BEARER_TOKEN`, or `TAXRATE_ACCOUNT_ID` plus
    ///   `TAXRATE_LICENSE_KEY` (one scheme required)
    /// - `TAXRATE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = if let Ok(token) = std::env::var("TAXRATE_BEARER_TOKEN") {
            Credentials::bearer(token)
        } else {
            match (
                std::env::var("TAXRATE_ACCOUNT_ID"),
                std::env::var("TAXRATE_LICENSE_KEY"),
            ) {
                (Ok(account_id), Ok(license_key)) => Credentials::basic(account_id, license_key),
                _ => return Err(ConfigError::MissingCredentials),
            }
        };

        Ok(Self {
            base_url: env_url("TAXRATE_BASE_URL", PRODUCTION_URL)?,
            credentials,
            timeout_secs: std::env::var("TAXRATE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Configuration pointing at a local mock server (for testing).
    pub fn local_mock(base_url: &str, credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("local_mock", base_url)?,
            credentials,
            timeout_secs: 5,
        })
    }
}

fn parse_url(context: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(context.to_string(), e.to_string()))
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither a bearer token nor a basic credential pair was provided.
    #[error("set TAXRATE_BEARER_TOKEN, or TAXRATE_ACCOUNT_ID and TAXRATE_LICENSE_KEY")]
    MissingCredentials,
    /// A URL failed to parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_config_uses_sandbox_endpoint() {
        let cfg = TaxrateConfig::sandbox(Credentials::bearer("t")).unwrap();
        assert_eq!(cfg.base_url.as_str(), "https://sandbox.api.taxrate.io/");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let cfg = TaxrateConfig::local_mock(
            "http://127.0.0.1:9000",
            Credentials::basic("2001234567", "1A2B3C4D5E6F7G8H"),
        )
        .unwrap();
        let printed = format!("{cfg:?}");
        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("1A2B3C4D5E6F7G8H"));

        let bearer = format!("{:?}", Credentials::bearer("secret-token"));
        assert!(!bearer.contains("secret-token"));
    }

    #[test]
    fn env_url_rejects_garbage() {
        std::env::set_var("TAXRATE_TEST_BAD_URL", "not a url");
        let result = env_url("TAXRATE_TEST_BAD_URL", PRODUCTION_URL);
        std::env::remove_var("TAXRATE_TEST_BAD_URL");
        assert!(result.is_err());
    }
}
