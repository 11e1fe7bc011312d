use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed transaction: {0}")]
    Decode(String),

    #[error("output script has no address form: {0}")]
    UnrecognizedScript(String),
}
