//! Nullable codec: real wire format, scripted addresses.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use bitcoin::consensus::encode;
use bitcoin::{Script, ScriptBuf, Transaction};
use txbook_codec::{CodecError, TransactionCodec};

/// A codec whose address mapping is a fixed table.
///
/// Decoding and encoding use the consensus format so fixtures stay realistic.
/// Every address lookup is counted, which lets tests prove that a code path
/// did not derive addresses.
#[derive(Default)]
pub struct NullCodec {
    addresses: HashMap<ScriptBuf, String>,
    lookups: AtomicUsize,
}

impl NullCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `script` to `address`. Scripts not registered have no address.
    pub fn with_address(mut self, script: ScriptBuf, address: impl Into<String>) -> Self {
        self.addresses.insert(script, address.into());
        self
    }

    /// Number of `script_to_address` calls so far.
    pub fn address_lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl TransactionCodec for NullCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Transaction, CodecError> {
        encode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode(&self, tx: &Transaction) -> Vec<u8> {
        encode::serialize(tx)
    }

    fn script_to_address(&self, script: &Script) -> Result<String, CodecError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.addresses
            .get(script)
            .cloned()
            .ok_or_else(|| CodecError::UnrecognizedScript(format!("unscripted: {:?}", script)))
    }

    fn name(&self) -> &str {
        "null-codec"
    }
}
