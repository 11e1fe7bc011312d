#![no_main]

use libfuzzer_sys::fuzz_target;
use txbook_types::{binary_string_to_bytes, bytes_to_binary_string};

fuzz_target!(|data: &[u8]| {
    // Bytes -> binary string -> bytes is lossless.
    let s = bytes_to_binary_string(data);
    assert_eq!(binary_string_to_bytes(&s).unwrap(), data);

    // Arbitrary UTF-8 either maps back to bytes or is rejected, never panics.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(bytes) = binary_string_to_bytes(text) {
            assert_eq!(bytes_to_binary_string(&bytes), text);
        }
    }
});
