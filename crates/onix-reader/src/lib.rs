//! # onix-reader — ONIX Message Reader
//!
//! Turns ONIX for Books message files into [`onix_core::Source`] values:
//! the message version marker plus every `<Product>` as an element tree.
//!
//! ## Scope
//!
//! - Reference-tag messages only (`<ONIXMessage>`, `<Product>`, ...).
//!   Short-tag messages (`<ONIXmessage>`, `<product>`) are recognized and
//!   rejected with [`ReadError::ShortTags`].
//! - No schema validation. The only structural check is the root element.
//! - Products from a 3.x message become [`ProductVariant::Onix3`]; products
//!   from any other release are kept as [`ProductVariant::Legacy`] so the
//!   batch layer can reject them with the source name attached.
//!
//! [`ProductVariant::Onix3`]: onix_core::ProductVariant::Onix3
//! [`ProductVariant::Legacy`]: onix_core::ProductVariant::Legacy

pub mod discover;
pub mod error;
pub mod xml;

pub use discover::{discover, DEFAULT_PATTERN};
pub use error::{ReadError, ReadResult};
pub use xml::{read_file, read_str};
