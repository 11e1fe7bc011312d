//! Deterministic transactions for tests.

use bitcoin::absolute::LockTime;
use bitcoin::hashes::Hash;
use bitcoin::transaction::Version;
use bitcoin::{
    Amount, OutPoint, PubkeyHash, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness,
};

/// Coinbase transaction of the Bitcoin genesis block.
pub const GENESIS_COINBASE_HEX: &str = concat!(
    "010000000100000000000000000000000000000000000000000000000000000000000000",
    "00ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f3230303920",
    "4368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f75",
    "7420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe55482719",
    "67f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51e",
    "c112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000",
);

/// Display id of [`GENESIS_COINBASE_HEX`].
pub const GENESIS_COINBASE_ID: &str =
    "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

/// Mainnet address of a P2PKH output paying to the all-zero key hash.
pub const ZERO_P2PKH_ADDRESS: &str = "1111111111111111111114oLvT2";

pub fn genesis_coinbase_bytes() -> Vec<u8> {
    hex::decode(GENESIS_COINBASE_HEX).expect("fixture hex is valid")
}

/// An input spending output `vout` of the transaction with internal hash `prev`.
pub fn spend(prev: [u8; 32], vout: u32) -> TxIn {
    TxIn {
        previous_output: OutPoint {
            txid: Txid::from_byte_array(prev),
            vout,
        },
        script_sig: ScriptBuf::new(),
        sequence: Sequence::MAX,
        witness: Witness::default(),
    }
}

/// A P2PKH locking script for the key hash `[seed; 20]`.
pub fn p2pkh(seed: u8) -> ScriptBuf {
    ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array([seed; 20]))
}

/// `OP_TRUE`: spendable, but with no address form.
pub fn non_standard_script() -> ScriptBuf {
    ScriptBuf::from_bytes(vec![0x51])
}

pub fn pay(sats: u64, script_pubkey: ScriptBuf) -> TxOut {
    TxOut {
        value: Amount::from_sat(sats),
        script_pubkey,
    }
}

pub fn transaction(input: Vec<TxIn>, output: Vec<TxOut>) -> Transaction {
    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input,
        output,
    }
}

/// Two inputs, one standard output (zero key hash) and one non-standard output.
pub fn mixed_outputs_transaction() -> Transaction {
    let mut prev = [0u8; 32];
    prev[0] = 0xaa;
    prev[31] = 0x01;
    transaction(
        vec![spend(prev, 0), spend([0x5c; 32], 7)],
        vec![pay(40_000, p2pkh(0)), pay(546, non_standard_script())],
    )
}
