//! Stateless transaction checks.

use crate::error::TransactionError;
use crate::{SenderSignedData, TransactionKind};

/// Validate the shape of one operation.
///
/// Only catches what can be decided from the payload itself. Object
/// ownership, balances and gas pricing are checked by the node.
pub fn validate_kind(kind: &TransactionKind) -> Result<(), TransactionError> {
    match kind {
        TransactionKind::Pay(pay) => {
            validate_payment(kind.name(), pay.coins.len(), pay.recipients.len(), pay.amounts.len())?;
            pay.total()
                .ok_or(TransactionError::AmountOverflow { kind: kind.name() })?;
        }
        TransactionKind::PaySui(pay) => {
            validate_payment(kind.name(), pay.coins.len(), pay.recipients.len(), pay.amounts.len())?;
            pay.total()
                .ok_or(TransactionError::AmountOverflow { kind: kind.name() })?;
        }
        TransactionKind::PayAllSui(pay) => {
            if pay.coins.is_empty() {
                return Err(TransactionError::NoCoins { kind: kind.name() });
            }
        }
        TransactionKind::Publish(publish) => {
            if publish.modules.is_empty() {
                return Err(TransactionError::NoModules);
            }
        }
        TransactionKind::Call(call) => {
            if call.module.is_empty() {
                return Err(TransactionError::EmptyIdentifier("module"));
            }
            if call.function.is_empty() {
                return Err(TransactionError::EmptyIdentifier("function"));
            }
        }
        TransactionKind::TransferObject(_)
        | TransactionKind::TransferSui(_)
        | TransactionKind::ChangeEpoch(_) => {}
    }
    Ok(())
}

/// Validate transaction data before it is handed out for signing.
pub fn validate_sender_signed_data(data: &SenderSignedData) -> Result<(), TransactionError> {
    if data.transactions.is_empty() {
        return Err(TransactionError::NoOperations);
    }
    if data.gas_budget == 0 {
        return Err(TransactionError::ZeroGasBudget);
    }
    data.transactions.iter().try_for_each(validate_kind)
}

fn validate_payment(
    kind: &'static str,
    coins: usize,
    recipients: usize,
    amounts: usize,
) -> Result<(), TransactionError> {
    if coins == 0 {
        return Err(TransactionError::NoCoins { kind });
    }
    if recipients == 0 {
        return Err(TransactionError::NoRecipients { kind });
    }
    if recipients != amounts {
        return Err(TransactionError::AmountMismatch {
            kind,
            recipients,
            amounts,
        });
    }
    Ok(())
}
