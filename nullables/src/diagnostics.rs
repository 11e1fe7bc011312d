//! Nullable diagnostics: records warnings instead of logging them.

use std::sync::Mutex;

use txbook_codec::CodecError;
use txbook_wallet_core::Diagnostics;

/// One reported output whose script had no address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmappedOutput {
    pub tx_id: String,
    pub index: usize,
    pub error: CodecError,
}

/// Collects every diagnostic so tests can assert on them.
#[derive(Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<UnmappedOutput>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<UnmappedOutput> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn unmapped_output(&self, tx_id: &str, index: usize, error: &CodecError) {
        self.events.lock().unwrap().push(UnmappedOutput {
            tx_id: tx_id.to_string(),
            index,
            error: error.clone(),
        });
    }
}
