#![no_main]

use libfuzzer_sys::fuzz_target;
use txbook_codec::BitcoinCodec;
use txbook_wallet_core::{TransactionCollection, TransactionRecord};

// Persisted records come from disk; parsing them must never panic, and
// anything accepted must serialize back to an equal value.
fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let codec = BitcoinCodec::default();

    if let Ok(record) = TransactionRecord::from_json(&codec, json) {
        let data = record.serialize(&codec);
        let back = TransactionRecord::decode(&codec, &data).expect("serialized record must decode");
        assert_eq!(back, record);
    }

    if let Ok(collection) = TransactionCollection::from_json(&codec, json) {
        let data = collection.serialize(&codec);
        let back = TransactionCollection::decode(&codec, &data)
            .expect("serialized collection must decode");
        assert_eq!(back, collection);
    }
});
