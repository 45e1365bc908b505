//! Error mapper: non-success response bodies to [`ErrorDescriptor`]s.
//!
//! This function is total. Whatever the service sends back — a structured
//! envelope, an unknown code, HTML from a proxy, or nothing at all — the
//! caller receives a usable descriptor, never a secondary parse failure.

use serde::Deserialize;

use taxrate_models::{ErrorCode, SeverityLevel};

use crate::error::{ErrorDescriptor, ErrorDetail};

/// The service's error envelope: `{"error":{"code":...,"message":...,"details":[...]}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Vec<DetailBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailBody {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    severity: Option<String>,
}

/// Map a failed response to a descriptor. Never fails.
///
/// Codes outside the vocabulary map to [`ErrorCode::UnhandledException`]
/// with the raw symbol preserved in the message; bodies that are not a
/// structured envelope map to [`ErrorCode::RemoteServerError`] with the raw
/// status and text.
pub fn map_error(http_status: u16, raw_body: &str) -> ErrorDescriptor {
    match serde_json::from_str::<ErrorEnvelope>(raw_body) {
        Ok(envelope) => {
            let body = envelope.error;
            let message = body
                .message
                .unwrap_or_else(|| format!("HTTP {http_status}"));
            let details = map_details(body.details);
            match ErrorCode::from_wire(&body.code) {
                ErrorCode::Unrecognized(raw) => {
                    tracing::warn!(
                        code = raw.as_str(),
                        http_status,
                        "unrecognized error code in envelope"
                    );
                    ErrorDescriptor {
                        code: ErrorCode::UnhandledException,
                        message: format!("{message} (service code {raw})"),
                        details,
                        http_status,
                    }
                }
                code => ErrorDescriptor {
                    code,
                    message,
                    details,
                    http_status,
                },
            }
        }
        Err(_) => {
            let trimmed = raw_body.trim();
            let message = if trimmed.is_empty() {
                format!("HTTP {http_status} with empty body")
            } else {
                format!("HTTP {http_status}: {}", truncate(trimmed, 200))
            };
            ErrorDescriptor {
                code: ErrorCode::RemoteServerError,
                message,
                details: Vec::new(),
                http_status,
            }
        }
    }
}

fn map_details(details: Vec<DetailBody>) -> Vec<ErrorDetail> {
    details
        .into_iter()
        .map(|detail| ErrorDetail {
            field: detail.field,
            description: detail
                .description
                .or(detail.message)
                .unwrap_or_default(),
            severity: detail
                .severity
                .as_deref()
                .map(SeverityLevel::from_wire)
                .unwrap_or(SeverityLevel::Error),
        })
        .collect()
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
