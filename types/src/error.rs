//! Codec error type shared across crates.

use thiserror::Error;

/// Failure to decode or encode a wire value.
///
/// Every decoder in the workspace surfaces one of these to its caller; none
/// of them fall back to a default value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("hex string is too long: identifier is {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("value is neither a JSON string nor a JSON object: {0}")]
    UnrecognizedShape(String),

    #[error("union has no arm set")]
    EmptyUnion,

    #[error("transaction kind must have exactly one variant populated, found {populated}")]
    MultipleOrZeroVariants { populated: usize },

    #[error("invalid base64 data: {0}")]
    InvalidBase64(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("json error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::Json(e.to_string())
    }
}
