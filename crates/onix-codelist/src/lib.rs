//! # onix-codelist — Codelist Resolver
//!
//! ONIX for Books encodes most enumerated values as short codes drawn from
//! numbered EDItEUR codelists (`03` in list 1 is "Notification confirmed on
//! publication"). This crate carries the tables the mapper needs and a pure
//! lookup over them.
//!
//! ## Contract
//!
//! - [`resolve`] maps `(list, code)` to a description, or `None`.
//! - [`symbol`] maps `(list, code)` to a symbolic constant name
//!   (`BISAC_Subject_Heading`), derived from the description unless an entry
//!   carries an explicit override.
//! - Unknown codes are never errors. Callers omit the derived field.
//!
//! Tables are static and read-only; there is no load step and no cache.
//! The language, country and region tables are curated subsets of the
//! ISO-derived lists; codes outside them resolve to `None`.

pub mod list;
pub mod resolver;
mod tables;

pub use list::CodeList;
pub use resolver::{derive_symbol, entry, resolve, symbol, CodeEntry};
