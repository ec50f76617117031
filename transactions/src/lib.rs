//! Transaction kinds for the Sui JSON-RPC protocol.
//!
//! Kinds:
//! - **TransferObject**: hand an owned object to another address
//! - **Publish**: upload compiled Move modules
//! - **Call**: invoke a Move function
//! - **TransferSui**: send native coin out of the gas object
//! - **Pay**: split coins of one type across recipients
//! - **PaySui**: split native coins across recipients
//! - **PayAllSui**: merge native coins and send the rest to one recipient
//! - **ChangeEpoch**: system transaction at an epoch boundary
//!
//! On the wire each kind is a record with one optional key per variant (see
//! [`sparse`]); in Rust it is the [`TransactionKind`] enum.

pub mod change_epoch;
pub mod error;
pub mod move_call;
pub mod pay;
pub mod publish;
pub mod signed;
pub mod sparse;
pub mod transfer_object;
pub mod transfer_sui;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::fmt;
use suiwire_types::{Address, CodecError, ObjectRef};

pub use change_epoch::ChangeEpoch;
pub use error::TransactionError;
pub use move_call::MoveCall;
pub use pay::{Pay, PayAllSui, PaySui};
pub use publish::ModulePublish;
pub use signed::{InputObjectKind, SenderSignedData, TransactionBytes};
pub use sparse::SparseTransactionKind;
pub use transfer_object::TransferObject;
pub use transfer_sui::TransferSui;

/// A single operation inside a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SparseTransactionKind", into = "SparseTransactionKind")]
pub enum TransactionKind {
    TransferObject(TransferObject),
    Publish(ModulePublish),
    Call(MoveCall),
    TransferSui(TransferSui),
    ChangeEpoch(ChangeEpoch),
    PaySui(PaySui),
    Pay(Pay),
    PayAllSui(PayAllSui),
}

impl TransactionKind {
    /// Decode from raw JSON, surfacing the variant-count error as such.
    pub fn from_json_bytes(data: &[u8]) -> Result<Self, CodecError> {
        let sparse: SparseTransactionKind = serde_json::from_slice(data)?;
        Self::try_from(sparse)
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// The wire name of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TransferObject(_) => "TransferObject",
            Self::Publish(_) => "Publish",
            Self::Call(_) => "Call",
            Self::TransferSui(_) => "TransferSui",
            Self::ChangeEpoch(_) => "ChangeEpoch",
            Self::PaySui(_) => "PaySui",
            Self::Pay(_) => "Pay",
            Self::PayAllSui(_) => "PayAllSui",
        }
    }

    /// Addresses that receive something from this operation.
    pub fn recipients(&self) -> Vec<&Address> {
        match self {
            Self::TransferObject(tx) => vec![&tx.recipient],
            Self::TransferSui(tx) => vec![&tx.recipient],
            Self::Pay(tx) => tx.recipients.iter().collect(),
            Self::PaySui(tx) => tx.recipients.iter().collect(),
            Self::PayAllSui(tx) => vec![&tx.recipient],
            Self::Publish(_) | Self::Call(_) | Self::ChangeEpoch(_) => Vec::new(),
        }
    }

    /// Objects consumed as input by this operation, excluding gas.
    pub fn input_objects(&self) -> &[ObjectRef] {
        match self {
            Self::TransferObject(tx) => std::slice::from_ref(&tx.object_ref),
            Self::Pay(tx) => &tx.coins,
            Self::PaySui(tx) => &tx.coins,
            Self::PayAllSui(tx) => &tx.coins,
            Self::Publish(_) | Self::Call(_) | Self::TransferSui(_) | Self::ChangeEpoch(_) => &[],
        }
    }

    /// Whether only validators can submit this kind.
    pub fn is_system(&self) -> bool {
        matches!(self, Self::ChangeEpoch(_))
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call(call) => write!(f, "Call({})", call.target()),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suiwire_types::{Base64Data, ObjectId, SequenceNumber, TransactionDigest};

    fn addr(s: &str) -> Address {
        Address::from_hex(s).unwrap()
    }

    fn coin(id: &str) -> ObjectRef {
        ObjectRef {
            object_id: ObjectId::from_hex(id).unwrap(),
            version: SequenceNumber::new(1),
            digest: TransactionDigest::new(vec![9; 32]),
        }
    }

    fn every_kind() -> Vec<TransactionKind> {
        vec![
            TransactionKind::TransferObject(TransferObject {
                recipient: addr("0x1"),
                object_ref: coin("0xc1"),
            }),
            TransactionKind::Publish(ModulePublish {
                modules: vec![Base64Data::new(vec![0xa1, 0x1c, 0xeb, 0x0b])],
            }),
            TransactionKind::Call(MoveCall {
                package: addr("0x2"),
                module: "coin".to_string(),
                function: "join".to_string(),
                type_arguments: vec![serde_json::json!("0x2::sui::SUI")],
                arguments: vec![serde_json::json!("0xc1"), serde_json::json!(5)],
            }),
            TransactionKind::TransferSui(TransferSui {
                recipient: addr("0x3"),
                amount: 1_000,
            }),
            TransactionKind::ChangeEpoch(ChangeEpoch {
                epoch: 12,
                storage_charge: 100,
                computation_charge: 200,
            }),
            TransactionKind::PaySui(PaySui {
                coins: vec![coin("0xc2")],
                recipients: vec![addr("0x4")],
                amounts: vec![7],
            }),
            TransactionKind::Pay(Pay {
                coins: vec![coin("0xc3")],
                recipients: vec![addr("0x5"), addr("0x6")],
                amounts: vec![1, 2],
            }),
            TransactionKind::PayAllSui(PayAllSui {
                coins: vec![coin("0xc4"), coin("0xc5")],
                recipient: addr("0x7"),
            }),
        ]
    }

    #[test]
    fn encodes_as_single_key_object() {
        for kind in every_kind() {
            let value = serde_json::to_value(&kind).unwrap();
            let map = value.as_object().unwrap();
            assert_eq!(map.len(), 1);
            assert!(map.contains_key(kind.name()), "{}", kind.name());
        }
    }

    #[test]
    fn decoded_variant_matches_populated_field() {
        for kind in every_kind() {
            let bytes = kind.to_json_bytes().unwrap();
            let decoded = TransactionKind::from_json_bytes(&bytes).unwrap();
            assert_eq!(decoded.name(), kind.name());
            assert_eq!(decoded, kind);
        }
    }

    #[test]
    fn decodes_node_payload() {
        let json = br#"{
            "TransferSui": {"recipient": "0x3", "amount": 25},
            "Unrelated": {"ignored": true},
            "Call": null
        }"#;
        let kind = TransactionKind::from_json_bytes(json).unwrap();
        assert_eq!(
            kind,
            TransactionKind::TransferSui(TransferSui {
                recipient: addr("0x3"),
                amount: 25
            })
        );
    }

    #[test]
    fn rejects_zero_variants() {
        let err = TransactionKind::from_json_bytes(br#"{}"#).unwrap_err();
        assert_eq!(err, CodecError::MultipleOrZeroVariants { populated: 0 });
        let err = TransactionKind::from_json_bytes(br#"{"Other": 1}"#).unwrap_err();
        assert_eq!(err, CodecError::MultipleOrZeroVariants { populated: 0 });
    }

    #[test]
    fn rejects_multiple_variants() {
        let json = br#"{
            "TransferSui": {"recipient": "0x3", "amount": 25},
            "ChangeEpoch": {"epoch": 1, "storage_charge": 0, "computation_charge": 0}
        }"#;
        let err = TransactionKind::from_json_bytes(json).unwrap_err();
        assert_eq!(err, CodecError::MultipleOrZeroVariants { populated: 2 });
    }

    #[test]
    fn serde_path_rejects_multiple_variants() {
        let json = r#"{"Pay": {"coins": [], "recipients": [], "amounts": []},
                       "PaySui": {"coins": [], "recipients": [], "amounts": []}}"#;
        let err = serde_json::from_str::<TransactionKind>(json).unwrap_err();
        assert!(err.to_string().contains("exactly one variant"));
    }

    #[test]
    fn malformed_payload_is_json_error() {
        let err = TransactionKind::from_json_bytes(br#"{"TransferSui": {"amount": 1}}"#)
            .unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
        let err = TransactionKind::from_json_bytes(b"42").unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn recipients_and_inputs() {
        let kinds = every_kind();
        assert_eq!(kinds[0].input_objects().len(), 1);
        assert_eq!(kinds[6].recipients(), vec![&addr("0x5"), &addr("0x6")]);
        assert!(kinds[1].recipients().is_empty());
        assert_eq!(kinds[7].input_objects().len(), 2);
        assert!(kinds[4].is_system());
    }

    #[test]
    fn display_names_call_target() {
        let kinds = every_kind();
        assert_eq!(kinds[2].to_string(), "Call(0x2::coin::join)");
        assert_eq!(kinds[3].to_string(), "TransferSui");
    }
}
