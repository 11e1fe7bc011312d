//! Side channel for non-fatal problems found while building records.

use txbook_codec::CodecError;

/// Receives warnings that do not stop record construction.
pub trait Diagnostics: Send + Sync {
    /// An output script could not be mapped to an address. The record keeps
    /// `None` for that output.
    fn unmapped_output(&self, tx_id: &str, index: usize, error: &CodecError);
}

/// Emits diagnostics as `tracing` warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn unmapped_output(&self, tx_id: &str, index: usize, error: &CodecError) {
        tracing::warn!(
            tx = %tx_id,
            output = index,
            error = %error,
            "error while parsing output script"
        );
    }
}
