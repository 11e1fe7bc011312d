//! Immutable, insertion-ordered collection of transaction records.
//!
//! Every update returns a new collection. Storage is shared through `Arc` and
//! copied on write, so a collection handed to reader threads never changes
//! underneath them.

use std::sync::Arc;

use bitcoin::TxOut;
use indexmap::IndexMap;

use txbook_codec::TransactionCodec;

use crate::error::WalletError;
use crate::record::{Confirmation, TransactionRecord, TransactionRecordData};

/// Map from transaction id to [`TransactionRecord`], keeping insertion order.
#[derive(Clone, Debug, Default)]
pub struct TransactionCollection {
    records: Arc<IndexMap<String, Arc<TransactionRecord>>>,
}

// Equal collections hold equal records in the same order.
impl PartialEq for TransactionCollection {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len() && self.records.iter().eq(other.records.iter())
    }
}

impl Eq for TransactionCollection {}

impl TransactionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// The record stored under `id`.
    pub fn get(&self, id: &str) -> Option<&TransactionRecord> {
        self.records.get(id).map(|record| record.as_ref())
    }

    /// Output `index` of transaction `id`.
    ///
    /// `None` when the id is unknown or the index is past the last output.
    pub fn get_output(&self, id: &str, index: usize) -> Option<&TxOut> {
        let record = self.get(id)?;
        let output = record.output(index);
        if output.is_none() {
            tracing::debug!(
                tx = %id,
                index,
                outputs = record.transaction().output.len(),
                "output index out of range"
            );
        }
        output
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.values().map(|record| record.as_ref())
    }

    /// A collection with `record` added, or replacing the record with the same
    /// id in its original position.
    pub fn insert(&self, record: TransactionRecord) -> Self {
        let mut next = self.clone();
        next.insert_in_place(record);
        next
    }

    /// A collection without `id`. Unknown ids leave the contents unchanged.
    pub fn remove(&self, id: &str) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.records).shift_remove(id);
        next
    }

    /// A collection where record `id` carries `confirmation`.
    pub fn confirm(&self, id: &str, confirmation: Confirmation) -> Self {
        match self.get(id) {
            Some(record) => self.insert(record.with_confirmation(confirmation)),
            None => {
                tracing::debug!(tx = %id, "confirmation for unknown transaction ignored");
                self.clone()
            }
        }
    }

    /// Persisted form: one entry per record, in insertion order.
    pub fn serialize<C: TransactionCodec + ?Sized>(&self, codec: &C) -> Vec<TransactionRecordData> {
        self.iter().map(|record| record.serialize(codec)).collect()
    }

    /// Rebuild a collection from its persisted form.
    ///
    /// A later entry with an already seen id replaces the earlier one.
    pub fn decode<C: TransactionCodec + ?Sized>(
        codec: &C,
        data: &[TransactionRecordData],
    ) -> Result<Self, WalletError> {
        let mut collection = Self::new();
        for entry in data {
            collection.insert_in_place(TransactionRecord::decode(codec, entry)?);
        }
        Ok(collection)
    }

    pub fn to_json<C: TransactionCodec + ?Sized>(&self, codec: &C) -> Result<String, WalletError> {
        Ok(serde_json::to_string_pretty(&self.serialize(codec))?)
    }

    pub fn from_json<C: TransactionCodec + ?Sized>(
        codec: &C,
        json: &str,
    ) -> Result<Self, WalletError> {
        let data: Vec<TransactionRecordData> = serde_json::from_str(json)?;
        Self::decode(codec, &data)
    }

    // Storage still shared with another handle is cloned before the write.
    // An existing id keeps its position.
    fn insert_in_place(&mut self, record: TransactionRecord) {
        let id = record.id().to_string();
        Arc::make_mut(&mut self.records).insert(id, Arc::new(record));
    }
}

impl FromIterator<TransactionRecord> for TransactionCollection {
    fn from_iter<I: IntoIterator<Item = TransactionRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.insert_in_place(record);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::TracingDiagnostics;
    use bitcoin::absolute::LockTime;
    use bitcoin::hashes::Hash;
    use bitcoin::transaction::Version;
    use bitcoin::{
        Amount, OutPoint, PubkeyHash, ScriptBuf, Sequence, Transaction, TxIn, Txid, Witness,
    };
    use txbook_codec::BitcoinCodec;

    fn record(id: &str, seed: u8, outputs: usize) -> TransactionRecord {
        let tx = Transaction {
            version: Version::TWO,
            lock_time: LockTime::ZERO,
            input: vec![TxIn {
                previous_output: OutPoint {
                    txid: Txid::from_byte_array([seed; 32]),
                    vout: 0,
                },
                script_sig: ScriptBuf::new(),
                sequence: Sequence::MAX,
                witness: Witness::default(),
            }],
            output: (0..outputs)
                .map(|i| TxOut {
                    value: Amount::from_sat(1_000 * (i as u64 + 1)),
                    script_pubkey: ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array([seed; 20])),
                })
                .collect(),
        };
        TransactionRecord::new(
            &BitcoinCodec::default(),
            &TracingDiagnostics,
            tx,
            id,
            None,
            Confirmation::UNCONFIRMED,
        )
    }

    #[test]
    fn missing_id_lookups_return_none() {
        let empty = TransactionCollection::new();
        assert!(empty.get("nope").is_none());
        assert!(empty.get_output("nope", 0).is_none());

        let one = empty.insert(record("a", 1, 1));
        assert!(one.get("b").is_none());
        assert!(one.get_output("b", 0).is_none());
    }

    #[test]
    fn get_output_finds_and_bounds_checks() {
        let collection = TransactionCollection::new().insert(record("a", 1, 2));
        assert_eq!(
            collection.get_output("a", 1).map(|o| o.value.to_sat()),
            Some(2_000)
        );
        assert!(collection.get_output("a", 2).is_none());
        assert!(collection.get_output("a", usize::MAX).is_none());
    }

    #[test]
    fn insert_leaves_original_untouched() {
        let first = TransactionCollection::new().insert(record("a", 1, 1));
        let second = first.insert(record("b", 2, 1));
        assert_eq!(first.len(), 1);
        assert!(!first.contains("b"));
        assert_eq!(second.len(), 2);
        assert!(second.contains("a"));
    }

    #[test]
    fn replace_keeps_position() {
        let collection: TransactionCollection =
            vec![record("a", 1, 1), record("b", 2, 1), record("c", 3, 1)]
                .into_iter()
                .collect();
        let confirmed = collection.confirm("b", Confirmation::at(5, 6));
        assert_eq!(confirmed.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(confirmed.get("b").unwrap().height(), Some(5));
        assert_eq!(collection.get("b").unwrap().height(), None);
    }

    #[test]
    fn confirm_unknown_id_is_a_no_op() {
        let collection = TransactionCollection::new().insert(record("a", 1, 1));
        assert_eq!(collection.confirm("zzz", Confirmation::at(1, 1)), collection);
    }

    #[test]
    fn remove_returns_new_collection() {
        let collection = TransactionCollection::new()
            .insert(record("a", 1, 1))
            .insert(record("b", 2, 1));
        let removed = collection.remove("a");
        assert_eq!(removed.ids().collect::<Vec<_>>(), vec!["b"]);
        assert!(collection.contains("a"));
        assert_eq!(collection.remove("missing"), collection);
    }

    #[test]
    fn remove_from_middle_keeps_remaining_order() {
        let collection: TransactionCollection =
            vec![record("a", 1, 1), record("b", 2, 1), record("c", 3, 1), record("d", 4, 1)]
                .into_iter()
                .collect();
        let removed = collection.remove("b");
        assert_eq!(removed.ids().collect::<Vec<_>>(), vec!["a", "c", "d"]);
        assert_eq!(
            removed.iter().map(|r| r.id()).collect::<Vec<_>>(),
            vec!["a", "c", "d"]
        );

        let readded = removed.insert(record("b", 2, 1));
        assert_eq!(readded.ids().collect::<Vec<_>>(), vec!["a", "c", "d", "b"]);
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn equality_depends_on_order() {
        let forward = TransactionCollection::new()
            .insert(record("a", 1, 1))
            .insert(record("b", 2, 1));
        let backward = TransactionCollection::new()
            .insert(record("b", 2, 1))
            .insert(record("a", 1, 1));
        assert_ne!(forward, backward);
        assert_eq!(forward, forward.remove("missing"));
    }

    #[test]
    fn serialize_preserves_insertion_order() {
        let codec = BitcoinCodec::default();
        let collection = TransactionCollection::new()
            .insert(record("z", 1, 1))
            .insert(record("a", 2, 1))
            .insert(record("m", 3, 1));
        let data = collection.serialize(&codec);
        let ids: Vec<_> = data.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);

        let back = TransactionCollection::decode(&codec, &data).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn decode_duplicate_ids_last_wins_in_place() {
        let codec = BitcoinCodec::default();
        let mut data = TransactionCollection::new()
            .insert(record("a", 1, 1))
            .insert(record("b", 2, 1))
            .serialize(&codec);
        let mut again = record("a", 9, 3).serialize(&codec);
        again.height = Some(7);
        data.push(again);

        let collection = TransactionCollection::decode(&codec, &data).unwrap();
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(collection.get("a").unwrap().height(), Some(7));
        assert_eq!(collection.get("a").unwrap().transaction().output.len(), 3);
    }

    #[test]
    fn concurrent_readers_see_a_stable_snapshot() {
        let snapshot = TransactionCollection::new()
            .insert(record("a", 1, 2))
            .insert(record("b", 2, 2));
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let view = &snapshot;
                scope.spawn(move || {
                    assert_eq!(view.len(), 2);
                    assert!(view.get_output("a", 1).is_some());
                });
            }
            let grown = snapshot.insert(record("c", 3, 1));
            assert_eq!(grown.len(), 3);
        });
        assert_eq!(snapshot.len(), 2);
    }
}
