//! Client-side error taxonomy.
//!
//! Three families, kept distinct so callers can tell them apart:
//! local marshalling failures ([`taxrate_core::WireError`], the call was
//! never sent), transport failures (`Timeout` / `ConnectionFailed`, the
//! service was never reached or never answered), and remote failures
//! ([`ErrorDescriptor`], the service answered with an error envelope).

use taxrate_core::WireError;
use taxrate_models::{ErrorCode, SeverityLevel};

use crate::config::ConfigError;

/// One field-level entry from the service's error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// The request field the detail refers to, when the service names one.
    pub field: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Severity reported by the service; defaults to `Error` when absent.
    pub severity: SeverityLevel,
}

/// A fully-populated description of a remote failure.
///
/// Created only by the error mapper; immutable once constructed. The `code`
/// is always a symbol from the closed vocabulary — unresolvable wire codes
/// become [`ErrorCode::UnhandledException`] and unparseable bodies become
/// [`ErrorCode::RemoteServerError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    /// The resolved error code.
    pub code: ErrorCode,
    /// Human-readable message from the envelope, or a synthesized one.
    pub message: String,
    /// Field-level details, possibly empty.
    pub details: Vec<ErrorDetail>,
    /// The HTTP status the service answered with.
    pub http_status: u16,
}

impl std::fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (HTTP {}): {}",
            self.code.as_wire(),
            self.http_status,
            self.message
        )
    }
}

/// Errors from Taxrate API calls.
#[derive(Debug, thiserror::Error)]
pub enum TaxrateError {
    /// Local marshalling failure; the call was never sent.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A path template placeholder had no value; the call was never sent.
    #[error("missing path parameter \"{name}\" for {endpoint}")]
    MissingParameter {
        /// The placeholder name.
        name: String,
        /// The operation being built.
        endpoint: String,
    },

    /// The call exceeded its configured timeout.
    #[error("request to {endpoint} timed out")]
    Timeout {
        /// The operation that timed out.
        endpoint: String,
    },

    /// The service was never reached.
    #[error("connection to {endpoint} failed: {source}")]
    ConnectionFailed {
        /// The operation being attempted.
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with an error envelope.
    #[error("{0}")]
    Api(ErrorDescriptor),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TaxrateError {
    /// The remote error descriptor, if this is a remote failure.
    pub fn api_error(&self) -> Option<&ErrorDescriptor> {
        match self {
            TaxrateError::Api(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// Whether the failure happened before any network activity.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            TaxrateError::Wire(_) | TaxrateError::MissingParameter { .. } | TaxrateError::Config(_)
        )
    }
}
