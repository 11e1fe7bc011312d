//! Error type for the shared primitives.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("character U+{code_point:04X} at position {position} is not a binary byte")]
    NonBinaryChar { position: usize, code_point: u32 },

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
