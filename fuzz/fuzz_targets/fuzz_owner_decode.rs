#![no_main]

use libfuzzer_sys::fuzz_target;
use suiwire_types::ObjectOwner;

fuzz_target!(|data: &[u8]| {
    if let Ok(owner) = ObjectOwner::from_json_bytes(data) {
        let encoded = owner.to_json_bytes().unwrap();
        assert_eq!(ObjectOwner::from_json_bytes(&encoded).unwrap(), owner);
    }
});
