//! Codec backed by the `bitcoin` crate's consensus encoding.

use bitcoin::consensus::encode;
use bitcoin::{Address, Script, Transaction};

use txbook_types::NetworkId;

use crate::{CodecError, TransactionCodec};

/// Consensus-format codec rendering addresses for one network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitcoinCodec {
    network: NetworkId,
}

impl BitcoinCodec {
    pub fn new(network: NetworkId) -> Self {
        Self { network }
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }
}

impl TransactionCodec for BitcoinCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Transaction, CodecError> {
        encode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn encode(&self, tx: &Transaction) -> Vec<u8> {
        encode::serialize(tx)
    }

    fn script_to_address(&self, script: &Script) -> Result<String, CodecError> {
        Address::from_script(script, self.network.to_bitcoin())
            .map(|address| address.to_string())
            .map_err(|e| CodecError::UnrecognizedScript(e.to_string()))
    }

    fn name(&self) -> &str {
        "bitcoin-consensus"
    }
}
