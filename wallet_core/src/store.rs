//! JSON file persistence for transaction collections.

use std::path::Path;

use txbook_codec::TransactionCodec;

use crate::collection::TransactionCollection;
use crate::error::WalletError;

/// Save a collection to a JSON file as an ordered array of records.
pub fn save_collection<C: TransactionCodec + ?Sized>(
    collection: &TransactionCollection,
    codec: &C,
    path: &Path,
) -> Result<(), WalletError> {
    let json = collection.to_json(codec)?;
    std::fs::write(path, json)?;
    tracing::debug!(
        path = %path.display(),
        records = collection.len(),
        "saved transaction collection"
    );
    Ok(())
}

/// Load a collection from a JSON file.
pub fn load_collection<C: TransactionCodec + ?Sized>(
    codec: &C,
    path: &Path,
) -> Result<TransactionCollection, WalletError> {
    let json = std::fs::read_to_string(path)?;
    let collection = TransactionCollection::from_json(codec, &json)?;
    tracing::debug!(
        path = %path.display(),
        records = collection.len(),
        "loaded transaction collection"
    );
    Ok(collection)
}

/// Load a collection, or start an empty one when the file does not exist yet.
pub fn load_or_empty<C: TransactionCodec + ?Sized>(
    codec: &C,
    path: &Path,
) -> Result<TransactionCollection, WalletError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no transaction store yet, starting empty");
        return Ok(TransactionCollection::new());
    }
    load_collection(codec, path)
}
