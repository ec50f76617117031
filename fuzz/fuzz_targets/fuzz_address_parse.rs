#![no_main]

use libfuzzer_sys::fuzz_target;
use suiwire_types::{is_same_str_address, Address};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(addr) = Address::from_hex(s) {
        // Both display forms must parse back to the same identifier.
        assert_eq!(Address::from_hex(&addr.to_string()).unwrap(), addr);
        assert_eq!(Address::from_hex(&addr.short_string()).unwrap(), addr);
        assert!(is_same_str_address(&addr.to_string(), &addr.short_string()));
    }
});
