#![no_main]

use ddd_errors::sanitize_to_identifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let id = sanitize_to_identifier(input);
        assert!(id.chars().all(|c| !c.is_ascii() || c.is_ascii_alphabetic()));
    }
});
