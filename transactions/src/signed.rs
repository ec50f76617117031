//! Transaction data as built for signing, and the builder response carrying it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use suiwire_types::{Address, Base64Data, CodecError, ObjectRef, SequenceNumber};

use crate::{SparseTransactionKind, TransactionKind};

/// One input object descriptor. The node reports these as free-form objects.
pub type InputObjectKind = Map<String, Value>;

/// Unsigned transaction data: what the sender signs.
///
/// Built once by a transaction builder and not modified afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderSignedData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<TransactionKind>,
    pub sender: Address,
    pub gas_payment: ObjectRef,
    pub gas_budget: u64,
}

impl SenderSignedData {
    pub fn new(
        transactions: Vec<TransactionKind>,
        sender: Address,
        gas_payment: ObjectRef,
        gas_budget: u64,
    ) -> Self {
        Self {
            transactions,
            sender,
            gas_payment,
            gas_budget,
        }
    }

    /// Decode from raw JSON.
    ///
    /// Identifiers and transaction kinds are decoded in a second pass so a bad
    /// nested value fails with its own [`CodecError`] kind rather than a
    /// generic JSON error.
    pub fn from_json_bytes(data: &[u8]) -> Result<Self, CodecError> {
        let wire: SenderSignedDataWire = serde_json::from_slice(data)?;
        let transactions = wire
            .transactions
            .into_iter()
            .map(|value| {
                let sparse: SparseTransactionKind = serde_json::from_value(value)?;
                TransactionKind::try_from(sparse)
            })
            .collect::<Result<Vec<_>, CodecError>>()?;

        Ok(Self {
            transactions,
            sender: Address::from_hex(&wire.sender)?,
            gas_payment: wire.gas_payment.into_object_ref()?,
            gas_budget: wire.gas_budget,
        })
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Whether this is a single-operation transaction.
    pub fn is_single(&self) -> bool {
        self.transactions.len() == 1
    }

    /// Every object the transaction reads, gas object last.
    pub fn input_objects(&self) -> Vec<&ObjectRef> {
        self.transactions
            .iter()
            .flat_map(|kind| kind.input_objects())
            .chain(std::iter::once(&self.gas_payment))
            .collect()
    }
}

/// [`SenderSignedData`] with identifiers and kinds still undecoded.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SenderSignedDataWire {
    #[serde(default)]
    transactions: Vec<Value>,
    sender: String,
    gas_payment: ObjectRefWire,
    gas_budget: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectRefWire {
    object_id: String,
    version: SequenceNumber,
    digest: String,
}

impl ObjectRefWire {
    fn into_object_ref(self) -> Result<ObjectRef, CodecError> {
        Ok(ObjectRef {
            object_id: Address::from_hex(&self.object_id)?,
            version: self.version,
            digest: Base64Data::from_base64(&self.digest)?,
        })
    }
}

/// Response of the transaction-building RPC methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBytes {
    /// Gas objects selected for the transaction.
    pub gas: Vec<ObjectRef>,
    /// Objects the transaction reads or writes.
    pub input_objects: Vec<InputObjectKind>,
    /// BCS bytes of the transaction data, ready to sign.
    pub tx_bytes: Base64Data,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PaySui, TransferSui};
    use suiwire_types::{SequenceNumber, TransactionDigest};

    fn gas() -> ObjectRef {
        ObjectRef {
            object_id: Address::from_hex("0x9a5").unwrap(),
            version: SequenceNumber::new(4),
            digest: TransactionDigest::new(vec![1; 32]),
        }
    }

    fn transfer() -> TransactionKind {
        TransactionKind::TransferSui(TransferSui {
            recipient: Address::from_hex("0xbeef").unwrap(),
            amount: 5,
        })
    }

    #[test]
    fn round_trips_with_camel_case_keys() {
        let data = SenderSignedData::new(
            vec![transfer()],
            Address::from_hex("0xa").unwrap(),
            gas(),
            1_000,
        );
        let bytes = data.to_json_bytes().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("gasPayment").is_some());
        assert_eq!(value["gasBudget"], 1_000);
        assert_eq!(SenderSignedData::from_json_bytes(&bytes).unwrap(), data);
        assert!(data.is_single());
    }

    #[test]
    fn empty_transactions_are_omitted() {
        let data = SenderSignedData::new(vec![], Address::ZERO, gas(), 1);
        let value: Value = serde_json::from_slice(&data.to_json_bytes().unwrap()).unwrap();
        assert!(value.get("transactions").is_none());
        let back = SenderSignedData::from_json_bytes(&data.to_json_bytes().unwrap()).unwrap();
        assert!(back.transactions.is_empty());
    }

    fn signed_json(transactions: &str, sender: &str, gas_payment: &str) -> String {
        format!(
            r#"{{"transactions":{transactions},"sender":"{sender}","gasPayment":{gas_payment},"gasBudget":1}}"#
        )
    }

    #[test]
    fn invalid_kind_keeps_variant_count_error() {
        let gas_json = serde_json::to_string(&gas()).unwrap();
        let json = signed_json(r#"[{"TransferSui":{"recipient":"0x1","amount":1}},{}]"#, "0x1", &gas_json);
        let err = SenderSignedData::from_json_bytes(json.as_bytes()).unwrap_err();
        assert_eq!(err, CodecError::MultipleOrZeroVariants { populated: 0 });
    }

    #[test]
    fn invalid_sender_keeps_hex_errors() {
        let gas_json = serde_json::to_string(&gas()).unwrap();
        let too_long = format!("0x{}", "11".repeat(33));
        let json = signed_json("[]", &too_long, &gas_json);
        let err = SenderSignedData::from_json_bytes(json.as_bytes()).unwrap_err();
        assert_eq!(err, CodecError::TooLong { max: 32, actual: 33 });

        let json = signed_json("[]", "0xnope", &gas_json);
        let err = SenderSignedData::from_json_bytes(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidHex(_)));
    }

    #[test]
    fn invalid_gas_payment_keeps_codec_errors() {
        let json = signed_json(
            "[]",
            "0x1",
            r#"{"objectId":"0x1","version":"3","digest":"not base64!"}"#,
        );
        let err = SenderSignedData::from_json_bytes(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidBase64(_)));
    }

    #[test]
    fn two_pass_decode_matches_serde() {
        let data = SenderSignedData::new(vec![transfer()], Address::from_hex("0xa").unwrap(), gas(), 7);
        let bytes = data.to_json_bytes().unwrap();
        let via_serde: SenderSignedData = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(SenderSignedData::from_json_bytes(&bytes).unwrap(), via_serde);
    }

    #[test]
    fn input_objects_end_with_gas() {
        let coin = ObjectRef {
            object_id: Address::from_hex("0xc0").unwrap(),
            ..gas()
        };
        let pay = TransactionKind::PaySui(PaySui {
            coins: vec![coin.clone()],
            recipients: vec![Address::ZERO],
            amounts: vec![1],
        });
        let data = SenderSignedData::new(vec![pay, transfer()], Address::ZERO, gas(), 1);
        assert_eq!(data.input_objects(), vec![&coin, &data.gas_payment]);
    }

    #[test]
    fn decodes_transaction_bytes() {
        let json = format!(
            r#"{{"gas":[{}],"inputObjects":[{{"ImmOrOwnedMoveObject":{{"objectId":"0x1"}}}}],"txBytes":"AAEC"}}"#,
            serde_json::to_string(&gas()).unwrap()
        );
        let tx: TransactionBytes = serde_json::from_str(&json).unwrap();
        assert_eq!(tx.gas, vec![gas()]);
        assert!(tx.input_objects[0].contains_key("ImmOrOwnedMoveObject"));
        assert_eq!(tx.tx_bytes.as_bytes(), &[0, 1, 2]);
    }
}
