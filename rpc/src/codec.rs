//! JSON boundary between the transport and the typed data layer.
//!
//! The transport hands over raw response bytes and takes raw request bytes.
//! Everything in between is typed. Failures are logged here at `debug` and
//! returned to the caller unchanged.

use serde::{de::DeserializeOwned, Serialize};
use suiwire_transactions::validation::validate_sender_signed_data;
use suiwire_transactions::{SenderSignedData, TransactionKind};
use suiwire_types::{Address, CodecError, ObjectOwner};

use crate::error::RpcError;

/// Decode any wire type from raw JSON bytes.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, RpcError> {
    match serde_json::from_slice(data) {
        Ok(value) => {
            tracing::trace!(
                target_type = std::any::type_name::<T>(),
                len = data.len(),
                "decoded payload"
            );
            Ok(value)
        }
        Err(e) => {
            tracing::debug!(
                target_type = std::any::type_name::<T>(),
                len = data.len(),
                error = %e,
                "failed to decode payload"
            );
            Err(e.into())
        }
    }
}

/// Encode any wire type to JSON bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, RpcError> {
    serde_json::to_vec(value).map_err(|e| {
        tracing::debug!(
            target_type = std::any::type_name::<T>(),
            error = %e,
            "failed to encode payload"
        );
        e.into()
    })
}

/// Decode an object owner, keeping the shape error distinct from JSON errors.
pub fn decode_object_owner(data: &[u8]) -> Result<ObjectOwner, RpcError> {
    logged("ObjectOwner", data, ObjectOwner::from_json_bytes(data))
}

/// Decode a transaction kind, rejecting records with zero or several variants.
pub fn decode_transaction_kind(data: &[u8]) -> Result<TransactionKind, RpcError> {
    logged("TransactionKind", data, TransactionKind::from_json_bytes(data))
}

/// Decode an address given either as a JSON string or as bare hex text.
pub fn decode_address(data: &[u8]) -> Result<Address, RpcError> {
    let trimmed = trim_whitespace(data);
    let result = if trimmed.first() == Some(&b'"') {
        serde_json::from_slice::<String>(trimmed)
            .map_err(CodecError::from)
            .and_then(|s| Address::from_hex(&s))
    } else {
        std::str::from_utf8(trimmed)
            .map_err(|e| CodecError::InvalidHex(e.to_string()))
            .and_then(Address::from_hex)
    };
    logged("Address", data, result)
}

/// Decode sender-signed data and run the stateless checks on it.
pub fn decode_sender_signed_data(data: &[u8]) -> Result<SenderSignedData, RpcError> {
    let signed = logged("SenderSignedData", data, SenderSignedData::from_json_bytes(data))?;
    validate_sender_signed_data(&signed).map_err(|e| {
        tracing::debug!(sender = %signed.sender.short_string(), error = %e, "rejected transaction data");
        e
    })?;
    Ok(signed)
}

fn trim_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let end = data
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &data[start..end]
}

fn logged<T>(target_type: &str, data: &[u8], result: Result<T, CodecError>) -> Result<T, RpcError> {
    match result {
        Ok(value) => {
            tracing::trace!(target_type, len = data.len(), "decoded payload");
            Ok(value)
        }
        Err(e) => {
            tracing::debug!(target_type, len = data.len(), error = %e, "failed to decode payload");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suiwire_transactions::{TransactionError, TransferSui};
    use suiwire_types::{ObjectRef, OwnerRecord, SequenceNumber, TransactionDigest};

    fn gas() -> ObjectRef {
        ObjectRef {
            object_id: Address::from_hex("0x9a5").unwrap(),
            version: SequenceNumber::new(1),
            digest: TransactionDigest::new(vec![0; 32]),
        }
    }

    #[test]
    fn generic_decode_reports_json_errors() {
        let ok: ObjectRef = decode(&encode(&gas()).unwrap()).unwrap();
        assert_eq!(ok, gas());
        let err = decode::<ObjectRef>(b"{").unwrap_err();
        assert!(matches!(err, RpcError::Json(_)));
    }

    #[test]
    fn owner_shape_error_is_preserved() {
        let err = decode_object_owner(b"17").unwrap_err();
        assert!(matches!(err.codec(), Some(CodecError::UnrecognizedShape(_))));

        let owner = decode_object_owner(br#"{"AddressOwner":"0x2"}"#).unwrap();
        assert_eq!(
            owner,
            ObjectOwner::Rule(OwnerRecord::AddressOwner(Address::from_hex("0x2").unwrap()))
        );
    }

    #[test]
    fn transaction_kind_variant_count_error_is_preserved() {
        let err = decode_transaction_kind(b"{}").unwrap_err();
        assert_eq!(
            err.codec(),
            Some(&CodecError::MultipleOrZeroVariants { populated: 0 })
        );
    }

    #[test]
    fn sender_signed_data_keeps_nested_codec_errors() {
        let gas_json = String::from_utf8(encode(&gas()).unwrap()).unwrap();
        let json = format!(
            r#"{{"transactions":[{{}}],"sender":"0x1","gasPayment":{gas_json},"gasBudget":1}}"#
        );
        let err = decode_sender_signed_data(json.as_bytes()).unwrap_err();
        assert_eq!(
            err.codec(),
            Some(&CodecError::MultipleOrZeroVariants { populated: 0 })
        );

        let sender = format!("0x{}", "ab".repeat(33));
        let json = format!(
            r#"{{"transactions":[],"sender":"{sender}","gasPayment":{gas_json},"gasBudget":1}}"#
        );
        let err = decode_sender_signed_data(json.as_bytes()).unwrap_err();
        assert_eq!(
            err.codec(),
            Some(&CodecError::TooLong { max: 32, actual: 33 })
        );
    }

    #[test]
    fn address_accepts_quoted_and_bare_forms() {
        let expected = Address::from_hex("0x2").unwrap();
        assert_eq!(decode_address(b"\"0x02\"").unwrap(), expected);
        assert_eq!(decode_address(b" 0X2\n").unwrap(), expected);
        assert!(matches!(
            decode_address(b"\"0xg\"").unwrap_err().codec(),
            Some(CodecError::InvalidHex(_))
        ));
        assert!(matches!(
            decode_address(&[0xff, 0xfe]).unwrap_err().codec(),
            Some(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn sender_signed_data_is_validated() {
        let transfer = TransactionKind::TransferSui(TransferSui {
            recipient: Address::from_hex("0x3").unwrap(),
            amount: 1,
        });
        let good = SenderSignedData::new(vec![transfer.clone()], Address::ZERO, gas(), 10);
        let decoded = decode_sender_signed_data(&encode(&good).unwrap()).unwrap();
        assert_eq!(decoded, good);

        let no_budget = SenderSignedData::new(vec![transfer], Address::ZERO, gas(), 0);
        let err = decode_sender_signed_data(&encode(&no_budget).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            RpcError::Transaction(TransactionError::ZeroGasBudget)
        ));
    }
}
