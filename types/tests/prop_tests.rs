use proptest::prelude::*;

use txbook_types::{binary_string_to_bytes, bytes_to_binary_string, display_hex};

proptest! {
    /// display_hex is plain hex of the reversed bytes.
    #[test]
    fn display_hex_is_reversed_hex(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut reversed = bytes.clone();
        reversed.reverse();
        prop_assert_eq!(display_hex(&bytes), hex::encode(&reversed));
    }

    /// The first display byte is the last internal byte.
    #[test]
    fn display_hex_starts_with_last_byte(bytes in prop::array::uniform32(0u8..)) {
        let shown = display_hex(&bytes);
        prop_assert_eq!(shown.len(), 64);
        prop_assert_eq!(&shown[..2], format!("{:02x}", bytes[31]));
        prop_assert_eq!(&shown[62..], format!("{:02x}", bytes[0]));
    }

    /// Reversing the decoded display form gives back the internal bytes.
    #[test]
    fn display_hex_inverts(bytes in prop::array::uniform32(0u8..)) {
        let mut decoded = hex::decode(display_hex(&bytes)).unwrap();
        decoded.reverse();
        prop_assert_eq!(decoded, bytes.to_vec());
    }

    /// Any byte string survives the binary string form, including through JSON.
    #[test]
    fn binary_string_survives_json(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let s = bytes_to_binary_string(&bytes);
        prop_assert_eq!(s.chars().count(), bytes.len());
        let json = serde_json::to_string(&s).unwrap();
        let back: String = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(binary_string_to_bytes(&back).unwrap(), bytes);
    }
}
