//! # onix-ledger — Classification Router and Batch Pipeline
//!
//! Drives a batch of ONIX sources through the record mapper into three
//! ledgers and writes them as JSON Lines:
//!
//! ```text
//! discover → read → version check → map → classify → ledger → write
//! ```
//!
//! | Notification type | Ledger   |
//! |-------------------|----------|
//! | 01, 02, 03        | `full`   |
//! | 04                | `update` |
//! | 05                | `delete` |
//! | anything else     | dropped (counted, logged) |
//!
//! The batch is all-or-nothing. Ledgers live in memory until every source
//! has been routed; only then does [`writer::write_ledgers`] touch disk.

pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod router;
pub mod writer;

pub use batch::{run_batch, run_directory, Batch, BatchOutcome, BatchSummary, SkippedSource};
pub use classify::{classify, classify_code, Classification};
pub use config::{LedgerFiles, PipelineConfig, ReaderConfig};
pub use error::{ConfigError, LedgerError, LedgerResult, WriteError};
pub use router::{Ledger, LedgerKind, Ledgers, Router, RouterStats, ABSENT_CODE};
pub use writer::{write_jsonl, write_ledgers};
