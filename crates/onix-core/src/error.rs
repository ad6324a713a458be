//! # Error Hierarchy — Batch-Level Failures
//!
//! Structured errors for conditions that abort an entire batch. Missing
//! optional structure and unresolvable codes are *not* errors; they are
//! handled by omission in the mapper. Only version and variant mismatches
//! reach this type.
//!
//! Each variant carries the source name so an automated caller can report
//! which file stopped the run.

use thiserror::Error;

use crate::message::MessageVersion;

/// Fatal, batch-level failure. No ledger is written when one occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// A source declared a message version other than ONIX 3.x.
    #[error("unsupported message version in {source_name}: {version} (only ONIX 3.x is processed)")]
    UnsupportedVersion {
        /// The source that declared the version.
        source_name: String,
        /// The version marker found.
        version: MessageVersion,
    },

    /// A record inside a batch was not an ONIX 3.x product.
    #[error("unsupported record variant in {source_name} at record {index}: expected an ONIX 3.x product")]
    UnsupportedRecord {
        /// The source holding the record.
        source_name: String,
        /// Zero-based position of the record within its source.
        index: usize,
    },

    /// A source could not be read and invalid files are configured as fatal.
    #[error("invalid source {source_name}: {reason}")]
    InvalidSource {
        /// The source that failed to read.
        source_name: String,
        /// Why the source was rejected.
        reason: String,
    },
}
