//! # onix-core — Foundational Types for the ONIX Ledger Pipeline
//!
//! This crate is the leaf of the workspace DAG. It defines the in-memory
//! shape of a parsed ONIX for Books message and the failure taxonomy that
//! every other crate reports through.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit presence.** Every field read from a record is a
//!    [`Presence`]: `Absent`, `Empty`, or `Value`. Mapping code never checks
//!    for "does this exist" ad hoc; it matches on the tri-state.
//!
//! 2. **Read-only record handles.** A [`Product`] wraps the `<Product>`
//!    element tree. Consumers borrow it and never mutate it.
//!
//! 3. **Version is data.** [`MessageVersion`] is read once per source from
//!    the root `release` attribute. Only ONIX 3.x is supported; everything
//!    else is rejected at the batch level, never per field.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `onix-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod element;
pub mod error;
pub mod message;
pub mod presence;
pub mod product;

// Re-export primary types for ergonomic imports.
pub use element::{Element, Node};
pub use error::BatchError;
pub use message::{MessageVersion, ProductVariant, Source};
pub use presence::Presence;
pub use product::Product;
