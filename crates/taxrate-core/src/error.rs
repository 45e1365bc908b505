//! Local wire-error taxonomy.
//!
//! Every variant here is detected before or during local marshalling —
//! none of them require a network round-trip. Transport and remote-service
//! failures live in `taxrate-client`.

use thiserror::Error;

/// Errors raised by the type registry, value codec, and graph walker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The requested model name was never registered.
    #[error("unknown model \"{0}\"")]
    UnknownModel(String),

    /// The requested enumeration name was never registered.
    #[error("unknown enumeration \"{0}\"")]
    UnknownEnum(String),

    /// A value did not match the semantic type its field descriptor declares.
    #[error("type mismatch for {model}.{field}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Model whose field was being converted.
        model: String,
        /// Wire name of the offending field.
        field: String,
        /// The semantic type the descriptor declares.
        expected: String,
        /// What was actually found.
        actual: String,
    },

    /// A timestamp string was not in RFC 3339 form with an offset.
    #[error("malformed timestamp in {model}.{field}: \"{raw}\"")]
    MalformedTimestamp {
        /// Model whose field was being converted.
        model: String,
        /// Wire name of the offending field.
        field: String,
        /// The rejected input.
        raw: String,
    },

    /// A numeric literal could not be parsed as an exact decimal.
    #[error("malformed decimal in {model}.{field}: \"{raw}\"")]
    MalformedDecimal {
        /// Model whose field was being converted.
        model: String,
        /// Wire name of the offending field.
        field: String,
        /// The rejected input.
        raw: String,
    },

    /// A response body with a success status was not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    MalformedPayload(String),

    /// The walker exceeded its recursion ceiling. Model schemas are
    /// tree-shaped; hitting this means a cyclic schema or a pathologically
    /// deep payload.
    #[error("object graph exceeds depth {limit} at {model}.{field}")]
    CyclicGraph {
        /// Model being walked when the ceiling was hit.
        model: String,
        /// Wire name of the field being descended into.
        field: String,
        /// The recursion ceiling.
        limit: usize,
    },
}
