//! Lowercase hex codec.
//!
//! Every address, asset id, seed and signature crosses the wire as lowercase
//! hex. Decoding is lenient about surrounding whitespace and embedded spaces
//! (seeds are often pasted in groups) but strict about everything else: an odd
//! number of digits or any non-hex character rejects the whole input.

use crate::error::HazeError;

/// Encode bytes as lowercase hex, two digits per byte, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Strip leading/trailing whitespace and every internal space.
pub fn normalize_hex(text: &str) -> String {
    text.trim().chars().filter(|c| *c != ' ').collect()
}

/// Decode hex text into bytes after [`normalize_hex`].
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>, HazeError> {
    let normalized = normalize_hex(text);
    hex::decode(normalized).map_err(|e| HazeError::InvalidHex {
        reason: e.to_string(),
    })
}

/// Decode hex text into a fixed-width array; any other decoded length is an error.
pub fn hex_to_array<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N], HazeError> {
    let bytes = hex_to_bytes(text)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| HazeError::InvalidLength {
        field,
        expected: N,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase_without_separators() {
        assert_eq!(bytes_to_hex(&[0x00, 0xab, 0xff, 0x10]), "00abff10");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn decodes_with_surrounding_and_internal_spaces() {
        assert_eq!(hex_to_bytes("  de ad be ef \n").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn accepts_uppercase_digits() {
        assert_eq!(hex_to_bytes("ABcd").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn rejects_non_hex_character() {
        assert!(matches!(hex_to_bytes("12g4"), Err(HazeError::InvalidHex { .. })));
    }

    #[test]
    fn rejects_odd_length() {
        assert!(matches!(hex_to_bytes("abc"), Err(HazeError::InvalidHex { .. })));
    }

    #[test]
    fn rejects_bad_low_nibble_even_when_high_nibble_is_valid() {
        assert!(hex_to_bytes("0z").is_err());
        assert!(hex_to_bytes("z0").is_err());
    }

    #[test]
    fn empty_input_decodes_to_empty() {
        assert_eq!(hex_to_bytes("   ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn array_decode_checks_width() {
        let ok: [u8; 2] = hex_to_array("pair", "0102").unwrap();
        assert_eq!(ok, [1, 2]);

        let err = hex_to_array::<32>("asset id", "0102").unwrap_err();
        assert_eq!(
            err,
            HazeError::InvalidLength {
                field: "asset id",
                expected: 32,
                actual: 2
            }
        );
    }
}
