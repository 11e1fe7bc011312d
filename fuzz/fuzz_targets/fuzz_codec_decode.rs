#![no_main]

use libfuzzer_sys::fuzz_target;
use txbook_codec::{BitcoinCodec, TransactionCodec};

// Decoding arbitrary bytes never panics, and anything that decodes
// re-encodes to bytes that decode to the same transaction.
fuzz_target!(|data: &[u8]| {
    let codec = BitcoinCodec::default();
    if let Ok(tx) = codec.decode(data) {
        let encoded = codec.encode(&tx);
        let again = codec.decode(&encoded).expect("re-encoded transaction must decode");
        assert_eq!(again, tx);
        for output in &tx.output {
            let _ = codec.script_to_address(&output.script_pubkey);
        }
    }
});
