//! Shared utilities for txbook.

pub mod logging;

pub use logging::{init_logging, LogFormat};
