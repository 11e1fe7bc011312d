//! Fundamental types for txbook.
//!
//! This crate defines the small primitives shared across the workspace:
//! display-order transaction hashes, the network selector, and the
//! binary-safe string form used to persist raw transaction bytes.

pub mod binary;
pub mod error;
pub mod hash;
pub mod network;

pub use binary::{binary_string_to_bytes, bytes_to_binary_string};
pub use error::TypesError;
pub use hash::display_hex;
pub use network::NetworkId;
