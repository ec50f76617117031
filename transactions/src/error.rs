//! Errors raised while decoding or validating transactions.

use suiwire_types::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("{kind} has no input coins")]
    NoCoins { kind: &'static str },

    #[error("{kind} has no recipients")]
    NoRecipients { kind: &'static str },

    #[error("{kind} has {recipients} recipients but {amounts} amounts")]
    AmountMismatch {
        kind: &'static str,
        recipients: usize,
        amounts: usize,
    },

    #[error("{kind} amounts overflow u64")]
    AmountOverflow { kind: &'static str },

    #[error("publish carries no modules")]
    NoModules,

    #[error("move call has an empty {0} name")]
    EmptyIdentifier(&'static str),

    #[error("transaction data has no operations")]
    NoOperations,

    #[error("gas budget must be positive")]
    ZeroGasBudget,

    #[error(transparent)]
    Codec(#[from] CodecError),
}
