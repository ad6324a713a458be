//! # Record Mapper
//!
//! Projects one ONIX 3.0 product into one output document. Mapping is
//! infallible: missing structure and unresolvable codes are handled by
//! omission, and version checks belong to the batch layer.
//!
//! The mapper holds only configuration. It borrows each product for the
//! duration of one call and keeps nothing afterwards, so the same mapper
//! maps the same product to an identical document every time.

use onix_core::{Presence, Product};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identifiers::IdentifierPolicy;
use crate::projector::Projector;
use crate::sections::PRODUCT;

/// One mapped record. Keys keep insertion order.
pub type Document = Map<String, Value>;

/// Key of the derived source-qualified record identifier.
pub const COKI_ID: &str = "COKI_ID";

/// Mapper settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Identifier slot policy.
    pub identifiers: IdentifierPolicy,
}

/// Maps products to documents.
#[derive(Debug, Clone, Default)]
pub struct RecordMapper {
    config: MapperConfig,
}

impl RecordMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map `product`. `source_name` is the caller's data-source label; it
    /// only feeds the derived `COKI_ID` key.
    pub fn map(&self, product: &Product, source_name: &str) -> Document {
        let projector = Projector::new(&self.config.identifiers);
        let mut doc = projector.object(product.element(), PRODUCT);
        doc.insert(COKI_ID.to_string(), Value::String(coki_id(product, source_name)));
        doc
    }
}

/// `{source}_{RecordReference}`. Every record carries one; an empty
/// reference leaves the suffix blank and a missing one renders as `null`.
fn coki_id(product: &Product, source_name: &str) -> String {
    match product.record_reference() {
        Presence::Value(reference) => format!("{source_name}_{reference}"),
        Presence::Empty => format!("{source_name}_"),
        Presence::Absent => format!("{source_name}_null"),
    }
}
