#![no_main]

use libfuzzer_sys::fuzz_target;
use suiwire_transactions::{SenderSignedData, TransactionKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(kind) = TransactionKind::from_json_bytes(data) {
        let encoded = kind.to_json_bytes().unwrap();
        let decoded = TransactionKind::from_json_bytes(&encoded).unwrap();
        assert_eq!(decoded.name(), kind.name());
    }

    let _ = SenderSignedData::from_json_bytes(data);
});
