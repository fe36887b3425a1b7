#![no_main]

use libfuzzer_sys::fuzz_target;

// Hex parsing must never panic, and anything it accepts must re-encode to
// the normalized input.
fuzz_target!(|text: &str| {
    if let Ok(bytes) = haze_types::hex_to_bytes(text) {
        let normalized = haze_types::normalize_hex(text).to_ascii_lowercase();
        assert_eq!(haze_types::bytes_to_hex(&bytes), normalized);
    }

    if let Ok(address) = haze_types::Address::from_hex(text) {
        assert_eq!(address.to_hex().len(), 64);
        assert_eq!(haze_types::Address::from_hex(&address.to_hex()), Ok(address));
    }

    let _ = haze_types::Signature::from_hex(text);
});
