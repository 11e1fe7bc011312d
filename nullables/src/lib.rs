//! Nullable infrastructure for deterministic testing.
//!
//! The codec and the diagnostics sink are the two collaborators a record
//! talks to. This crate provides test-friendly implementations that:
//! - Return scripted values
//! - Record what they were asked
//! - Never log or touch the filesystem
//!
//! Usage: swap real implementations for nullables in tests.

pub mod codec;
pub mod diagnostics;
pub mod fixtures;

pub use codec::NullCodec;
pub use diagnostics::{RecordingDiagnostics, UnmappedOutput};
