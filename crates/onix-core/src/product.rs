//! # Product — Read-Only Record Handle
//!
//! One `<Product>` entry from an ONIX 3.x message. The mapper and the
//! classifier borrow a `Product`; neither retains it past a single call.

use crate::element::Element;
use crate::presence::Presence;

/// A single ONIX 3.x product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    element: Element,
}

impl Product {
    /// Reference tag name of a product record.
    pub const TAG: &'static str = "Product";

    /// Wrap a parsed `<Product>` element.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The underlying element tree.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The `<RecordReference>` value.
    pub fn record_reference(&self) -> Presence<String> {
        self.element.field("RecordReference")
    }

    /// The raw `<NotificationType>` code (codelist 1).
    pub fn notification_code(&self) -> Presence<String> {
        self.element.field("NotificationType")
    }
}

impl From<Element> for Product {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}
