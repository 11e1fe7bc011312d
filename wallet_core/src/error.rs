use thiserror::Error;

use txbook_codec::CodecError;
use txbook_types::TypesError;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("invalid transaction payload: {0}")]
    BinaryString(#[from] TypesError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}
