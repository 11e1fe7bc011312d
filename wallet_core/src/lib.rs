//! Wallet core library for txbook.
//!
//! Provides what a wallet or indexing client needs to keep track of the
//! transactions it has seen:
//! - [`TransactionRecord`]: a decoded transaction plus derived input
//!   references, output addresses and confirmation data
//! - [`TransactionCollection`]: an immutable, insertion-ordered map of records
//! - JSON persistence of records and collections
//! - Configuration loaded from TOML

pub mod collection;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod record;
pub mod store;

pub use collection::TransactionCollection;
pub use config::WalletConfig;
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use error::WalletError;
pub use record::{Confirmation, TransactionRecord, TransactionRecordData};
pub use store::{load_collection, load_or_empty, save_collection};
