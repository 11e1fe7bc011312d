//! Binary-safe string form for raw bytes.
//!
//! Each byte maps to the character with the same code point (U+0000..=U+00FF),
//! so any byte sequence survives a trip through a JSON string. This is the
//! layout of the `txBin` field written by existing wallet clients.

use crate::TypesError;

/// Map every byte to the character with the same code point.
pub fn bytes_to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Inverse of [`bytes_to_binary_string`].
///
/// Fails on the first character above U+00FF.
pub fn binary_string_to_bytes(s: &str) -> Result<Vec<u8>, TypesError> {
    s.chars()
        .enumerate()
        .map(|(position, c)| {
            u8::try_from(c).map_err(|_| TypesError::NonBinaryChar {
                position,
                code_point: c as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_bytes_become_latin1_chars() {
        let s = bytes_to_binary_string(&[0x00, 0x41, 0xe9, 0xff]);
        assert_eq!(s, "\u{0}A\u{e9}\u{ff}");
        assert_eq!(s.chars().count(), 4);
    }

    #[test]
    fn rejects_wide_chars() {
        let err = binary_string_to_bytes("ab\u{263a}").unwrap_err();
        assert_eq!(
            err,
            TypesError::NonBinaryChar {
                position: 2,
                code_point: 0x263a
            }
        );
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(binary_string_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(bytes_to_binary_string(&[]), "");
    }
}
