//! Wire projection of [`TransactionKind`].
//!
//! Nodes send a transaction kind as an object with one optional key per
//! variant name, e.g. `{"TransferSui": {...}}`. Decoding counts the populated
//! keys and rejects anything other than exactly one.

use serde::{Deserialize, Serialize};
use suiwire_types::CodecError;

use crate::change_epoch::ChangeEpoch;
use crate::move_call::MoveCall;
use crate::pay::{Pay, PayAllSui, PaySui};
use crate::publish::ModulePublish;
use crate::transfer_object::TransferObject;
use crate::transfer_sui::TransferSui;
use crate::TransactionKind;

/// A transaction kind as a record of mutually exclusive optional fields.
///
/// Unknown keys are ignored and `null` counts as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SparseTransactionKind {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_object: Option<TransferObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<ModulePublish>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<MoveCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_sui: Option<TransferSui>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_epoch: Option<ChangeEpoch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_sui: Option<PaySui>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay: Option<Pay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_all_sui: Option<PayAllSui>,
}

impl SparseTransactionKind {
    /// Number of variant fields that hold a value.
    pub fn populated(&self) -> usize {
        [
            self.transfer_object.is_some(),
            self.publish.is_some(),
            self.call.is_some(),
            self.transfer_sui.is_some(),
            self.change_epoch.is_some(),
            self.pay_sui.is_some(),
            self.pay.is_some(),
            self.pay_all_sui.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

impl TryFrom<SparseTransactionKind> for TransactionKind {
    type Error = CodecError;

    fn try_from(sparse: SparseTransactionKind) -> Result<Self, Self::Error> {
        let populated = sparse.populated();
        if populated != 1 {
            return Err(CodecError::MultipleOrZeroVariants { populated });
        }

        let SparseTransactionKind {
            transfer_object,
            publish,
            call,
            transfer_sui,
            change_epoch,
            pay_sui,
            pay,
            pay_all_sui,
        } = sparse;

        let kind = match (
            transfer_object,
            publish,
            call,
            transfer_sui,
            change_epoch,
            pay_sui,
            pay,
            pay_all_sui,
        ) {
            (Some(tx), ..) => Self::TransferObject(tx),
            (_, Some(tx), ..) => Self::Publish(tx),
            (_, _, Some(tx), ..) => Self::Call(tx),
            (_, _, _, Some(tx), ..) => Self::TransferSui(tx),
            (_, _, _, _, Some(tx), ..) => Self::ChangeEpoch(tx),
            (_, _, _, _, _, Some(tx), ..) => Self::PaySui(tx),
            (_, _, _, _, _, _, Some(tx), _) => Self::Pay(tx),
            (_, _, _, _, _, _, _, Some(tx)) => Self::PayAllSui(tx),
            _ => return Err(CodecError::MultipleOrZeroVariants { populated: 0 }),
        };
        Ok(kind)
    }
}

impl From<TransactionKind> for SparseTransactionKind {
    fn from(kind: TransactionKind) -> Self {
        let mut sparse = Self::default();
        match kind {
            TransactionKind::TransferObject(tx) => sparse.transfer_object = Some(tx),
            TransactionKind::Publish(tx) => sparse.publish = Some(tx),
            TransactionKind::Call(tx) => sparse.call = Some(tx),
            TransactionKind::TransferSui(tx) => sparse.transfer_sui = Some(tx),
            TransactionKind::ChangeEpoch(tx) => sparse.change_epoch = Some(tx),
            TransactionKind::PaySui(tx) => sparse.pay_sui = Some(tx),
            TransactionKind::Pay(tx) => sparse.pay = Some(tx),
            TransactionKind::PayAllSui(tx) => sparse.pay_all_sui = Some(tx),
        }
        sparse
    }
}
