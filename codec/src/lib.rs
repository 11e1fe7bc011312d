//! Transaction codec for txbook.
//!
//! The record and collection types never parse the wire format themselves.
//! They go through [`TransactionCodec`], which turns raw bytes into a decoded
//! transaction, back again, and maps output scripts to address strings.

pub mod bitcoin_codec;
pub mod error;

pub use bitcoin::{Script, ScriptBuf, Transaction, TxIn, TxOut};
pub use bitcoin_codec::BitcoinCodec;
pub use error::CodecError;

/// Trait for the external transaction codec.
pub trait TransactionCodec: Send + Sync {
    /// Decode raw transaction bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Transaction, CodecError>;

    /// Encode a decoded transaction. Total for any constructed transaction.
    fn encode(&self, tx: &Transaction) -> Vec<u8>;

    /// Map an output locking script to its canonical address string.
    fn script_to_address(&self, script: &Script) -> Result<String, CodecError>;

    /// Human-readable name of this codec.
    fn name(&self) -> &str;
}
