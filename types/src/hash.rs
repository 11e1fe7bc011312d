//! Display-order rendering of transaction hashes.

/// Hex-encode bytes held in internal order, last byte first.
///
/// Transaction ids are stored little-endian and shown to users reversed.
/// Reads the slice back to front; the source is never touched.
pub fn display_hex(internal: &[u8]) -> String {
    internal.iter().rev().map(|b| format!("{:02x}", b)).collect()
}
