//! # onix-mapper — Record Projection Engine
//!
//! Turns an ONIX 3.0 [`Product`](onix_core::Product) into a flat,
//! JSON-compatible [`Document`].
//!
//! ## Layers
//!
//! - [`projector`]: the generic engine. A [`Shape`] is a static list of
//!   [`Rule`]s; the projector applies presence and multiplicity rules
//!   uniformly to whatever shape it is given.
//! - [`identifiers`]: typed identifier collections split into named slots
//!   by a data table, under a configurable [`IdentifierPolicy`].
//! - [`sections`]: the product layout as shapes.
//! - [`record`]: [`RecordMapper`], which ties the above together and adds
//!   the derived `COKI_ID` key.
//!
//! Adding a field is a change to [`sections`] only.

pub mod identifiers;
pub mod projector;
pub mod record;
pub mod sections;

pub use identifiers::{DuplicatePolicy, IdentifierPolicy, IdentifierTable, MissingSlot};
pub use projector::{Form, Projector, Rule, Shape};
pub use record::{Document, MapperConfig, RecordMapper, COKI_ID};
