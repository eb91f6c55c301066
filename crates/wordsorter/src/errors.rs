//! # Error Types

/// Errors from wordsorter operations.
///
/// Training, untraining, category removal, and inference are infallible;
/// only state serialization can fail.
#[derive(Debug, thiserror::Error)]
pub enum WordsorterError {
    /// State could not be encoded to JSON.
    #[error("state encode error: {0}")]
    StateEncode(String),

    /// State input string is not valid JSON.
    #[error("state parse error: {0}")]
    StateParse(String),

    /// Decoded state input is not a JSON object.
    #[error("state must be a JSON object, got {kind}")]
    StateShape {
        /// The JSON kind of the rejected input.
        kind: &'static str,
    },

    /// A required state field is absent from the input.
    #[error("state is missing an expected field: [{field}]")]
    MissingStateField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The `options` record of an imported state is malformed.
    #[error("invalid options: {0}; pass in an object")]
    InvalidOptions(String),
}

/// Result type for wordsorter operations.
pub type WsResult<T> = core::result::Result<T, WordsorterError>;
