//! Transaction record: a decoded transaction plus the metadata a wallet
//! derives from it.

use bitcoin::hashes::Hash;
use bitcoin::{Transaction, TxOut};
use serde::{Deserialize, Serialize};

use txbook_codec::TransactionCodec;
use txbook_types::hash::display_hex;
use txbook_types::{binary_string_to_bytes, bytes_to_binary_string};

use crate::diagnostics::Diagnostics;
use crate::error::WalletError;

/// Where and when a transaction was confirmed. Both fields are `None` while
/// the transaction is unconfirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Confirmation {
    pub height: Option<u32>,
    pub timestamp: Option<u64>,
}

impl Confirmation {
    pub const UNCONFIRMED: Self = Self {
        height: None,
        timestamp: None,
    };

    pub fn at(height: u32, timestamp: u64) -> Self {
        Self {
            height: Some(height),
            timestamp: Some(timestamp),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.height.is_some()
    }
}

/// Persisted form of a [`TransactionRecord`].
///
/// `tx_bin` holds the encoded transaction as a binary string (one char per
/// byte), see [`txbook_types::binary`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecordData {
    pub tx_bin: String,
    pub id: String,
    pub output_addresses: Vec<Option<String>>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// A decoded transaction with derived input references and output addresses.
///
/// Records are values: nothing mutates one after construction. Updates such as
/// a confirmation arriving produce a new record via [`with_confirmation`].
///
/// [`with_confirmation`]: TransactionRecord::with_confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRecord {
    transaction: Transaction,
    id: String,
    input_references: Vec<String>,
    output_addresses: Vec<Option<String>>,
    confirmation: Confirmation,
}

impl TransactionRecord {
    /// Build a record around a decoded transaction.
    ///
    /// `id` is trusted as given. When `output_addresses` is `None` one address
    /// per output is derived through `codec`; outputs whose script has no
    /// address form get `None` and are reported to `diagnostics`. A supplied
    /// list is stored exactly as given, whatever its length.
    pub fn new<C: TransactionCodec + ?Sized>(
        codec: &C,
        diagnostics: &dyn Diagnostics,
        transaction: Transaction,
        id: impl Into<String>,
        output_addresses: Option<Vec<Option<String>>>,
        confirmation: Confirmation,
    ) -> Self {
        let id = id.into();
        let output_addresses = match output_addresses {
            Some(addresses) => addresses,
            None => derive_output_addresses(codec, diagnostics, &transaction, &id),
        };
        Self::assemble(transaction, id, output_addresses, confirmation)
    }

    /// Decode raw bytes and build a record with derived output addresses.
    pub fn from_bytes<C: TransactionCodec + ?Sized>(
        codec: &C,
        diagnostics: &dyn Diagnostics,
        bytes: &[u8],
        id: impl Into<String>,
        confirmation: Confirmation,
    ) -> Result<Self, WalletError> {
        let transaction = codec.decode(bytes)?;
        Ok(Self::new(
            codec,
            diagnostics,
            transaction,
            id,
            None,
            confirmation,
        ))
    }

    /// Rebuild a record from its persisted form.
    ///
    /// Output addresses are taken verbatim and never re-derived, so earlier
    /// results (including `None` entries) survive unchanged.
    pub fn decode<C: TransactionCodec + ?Sized>(
        codec: &C,
        data: &TransactionRecordData,
    ) -> Result<Self, WalletError> {
        let bytes = binary_string_to_bytes(&data.tx_bin)?;
        let transaction = codec.decode(&bytes)?;
        Ok(Self::assemble(
            transaction,
            data.id.clone(),
            data.output_addresses.clone(),
            Confirmation {
                height: data.height,
                timestamp: data.timestamp,
            },
        ))
    }

    /// The persisted form of this record.
    pub fn serialize<C: TransactionCodec + ?Sized>(&self, codec: &C) -> TransactionRecordData {
        TransactionRecordData {
            tx_bin: bytes_to_binary_string(&codec.encode(&self.transaction)),
            id: self.id.clone(),
            output_addresses: self.output_addresses.clone(),
            height: self.confirmation.height,
            timestamp: self.confirmation.timestamp,
        }
    }

    pub fn to_json<C: TransactionCodec + ?Sized>(&self, codec: &C) -> Result<String, WalletError> {
        Ok(serde_json::to_string(&self.serialize(codec))?)
    }

    pub fn from_json<C: TransactionCodec + ?Sized>(
        codec: &C,
        json: &str,
    ) -> Result<Self, WalletError> {
        let data: TransactionRecordData = serde_json::from_str(json)?;
        Self::decode(codec, &data)
    }

    /// A copy of this record carrying new confirmation data.
    pub fn with_confirmation(&self, confirmation: Confirmation) -> Self {
        Self {
            confirmation,
            ..self.clone()
        }
    }

    fn assemble(
        transaction: Transaction,
        id: String,
        output_addresses: Vec<Option<String>>,
        confirmation: Confirmation,
    ) -> Self {
        let input_references = transaction
            .input
            .iter()
            .map(|input| display_hex(input.previous_output.txid.as_byte_array()))
            .collect();
        Self {
            transaction,
            id,
            input_references,
            output_addresses,
            confirmation,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display-order ids of the transactions each input spends from.
    pub fn input_references(&self) -> &[String] {
        &self.input_references
    }

    pub fn output_addresses(&self) -> &[Option<String>] {
        &self.output_addresses
    }

    pub fn confirmation(&self) -> Confirmation {
        self.confirmation
    }

    pub fn height(&self) -> Option<u32> {
        self.confirmation.height
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.confirmation.timestamp
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmation.is_confirmed()
    }

    /// The output at `index`, or `None` when out of range.
    pub fn output(&self, index: usize) -> Option<&TxOut> {
        self.transaction.output.get(index)
    }

    /// The id computed from the transaction contents, in display order.
    pub fn computed_id(&self) -> String {
        display_hex(self.transaction.compute_txid().as_byte_array())
    }

    /// Whether the stored id agrees with the transaction contents.
    ///
    /// Construction never checks this; callers that do not trust their id
    /// source can.
    pub fn id_matches_transaction(&self) -> bool {
        self.id.eq_ignore_ascii_case(&self.computed_id())
    }
}

fn derive_output_addresses<C: TransactionCodec + ?Sized>(
    codec: &C,
    diagnostics: &dyn Diagnostics,
    transaction: &Transaction,
    id: &str,
) -> Vec<Option<String>> {
    transaction
        .output
        .iter()
        .enumerate()
        .map(
            |(index, output)| match codec.script_to_address(&output.script_pubkey) {
                Ok(address) => Some(address),
                Err(e) => {
                    diagnostics.unmapped_output(id, index, &e);
                    None
                }
            },
        )
        .collect()
}
