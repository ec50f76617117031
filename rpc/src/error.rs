//! Boundary error types.

use suiwire_transactions::TransactionError;
use suiwire_types::CodecError;
use suiwire_utils::LoggingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

impl RpcError {
    /// The codec-level failure behind this error, if there is one.
    pub fn codec(&self) -> Option<&CodecError> {
        match self {
            RpcError::Codec(e) | RpcError::Transaction(TransactionError::Codec(e)) => Some(e),
            _ => None,
        }
    }
}
