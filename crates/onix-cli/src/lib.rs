//! # onix-cli — Command-Line Front End
//!
//! Provides the `onix-parser` binary.
//!
//! ## Subcommands
//!
//! - `onix-parser parse <INPUT> <OUTPUT> <SOURCE_NAME>`: run a directory of
//!   ONIX 3.0 messages through the ledger pipeline.
//! - `onix-parser codes <LIST> [CODE]`: print codelist entries and the
//!   symbols derived from them.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success; all three ledgers written |
//! | 1 | input rejected (unsupported version or record); nothing written |
//! | 2 | operational failure (config, I/O) |
//!
//! Argument parsing lives in `main.rs`; handlers here delegate to the
//! library crates.

pub mod codes;
pub mod parse;

/// Success.
pub const EXIT_OK: u8 = 0;
/// The batch (or a lookup) was rejected.
pub const EXIT_REJECTED: u8 = 1;
/// An operational error.
pub const EXIT_FAILURE: u8 = 2;
