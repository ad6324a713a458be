//! # Messages and Sources
//!
//! A [`Source`] is one message file after reading: its name, the version
//! marker found on the root element, and the product records it contained
//! in document order.
//!
//! ## Version Detection
//!
//! ONIX 3.x messages carry `release="3.0"` (or `3.1`) on `<ONIXMessage>`.
//! ONIX 2.1 messages either omit the attribute or carry `release="2.1"`.
//! Anything else is unrecognized. Only 3.x is supported downstream.

use serde::Serialize;

use crate::element::Element;
use crate::product::Product;

/// The message-format version marker of a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum MessageVersion {
    /// ONIX for Books 3.x.
    Onix3 {
        /// The `release` attribute value.
        release: String,
    },
    /// ONIX for Books 2.x (no release attribute, or a 2.x release).
    Onix2 {
        /// The `release` attribute value, when present.
        release: Option<String>,
    },
    /// A release string that matches no known ONIX family.
    Unrecognized {
        /// The `release` attribute value.
        release: String,
    },
}

impl MessageVersion {
    /// Classify a root `release` attribute.
    pub fn from_release(release: Option<&str>) -> Self {
        match release.map(str::trim) {
            None | Some("") => Self::Onix2 { release: None },
            Some(r) if r.starts_with('3') => Self::Onix3 {
                release: r.to_string(),
            },
            Some(r) if r.starts_with('2') => Self::Onix2 {
                release: Some(r.to_string()),
            },
            Some(r) => Self::Unrecognized {
                release: r.to_string(),
            },
        }
    }

    /// Whether records of this version may reach the mapper.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Onix3 { .. })
    }
}

impl std::fmt::Display for MessageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Onix3 { release } => write!(f, "ONIX {release}"),
            Self::Onix2 { release: Some(r) } => write!(f, "ONIX {r}"),
            Self::Onix2 { release: None } => write!(f, "ONIX 2.x"),
            Self::Unrecognized { release } => write!(f, "unrecognized release {release:?}"),
        }
    }
}

/// A product record as delivered by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductVariant {
    /// A product from an ONIX 3.x message.
    Onix3(Product),
    /// A product from any other message family, kept as a raw tree.
    Legacy(Element),
}

/// One message file after reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Display name of the source (usually the file name).
    pub name: String,
    /// The version marker found on the message root.
    pub version: MessageVersion,
    /// Product records in document order.
    pub records: Vec<ProductVariant>,
}

impl Source {
    /// Number of product records in the source.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no product records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_3_is_supported() {
        let v = MessageVersion::from_release(Some("3.0"));
        assert!(v.is_supported());
        assert_eq!(v.to_string(), "ONIX 3.0");
        assert!(MessageVersion::from_release(Some("3.1")).is_supported());
    }

    #[test]
    fn missing_release_is_onix2() {
        let v = MessageVersion::from_release(None);
        assert_eq!(v, MessageVersion::Onix2 { release: None });
        assert!(!v.is_supported());
    }

    #[test]
    fn release_2_1_is_onix2() {
        let v = MessageVersion::from_release(Some("2.1"));
        assert_eq!(
            v,
            MessageVersion::Onix2 {
                release: Some("2.1".to_string())
            }
        );
        assert!(!v.is_supported());
    }

    #[test]
    fn unknown_release_is_unrecognized() {
        let v = MessageVersion::from_release(Some("9.9"));
        assert!(matches!(v, MessageVersion::Unrecognized { .. }));
        assert!(!v.is_supported());
    }

    #[test]
    fn source_len() {
        let source = Source {
            name: "a.xml".to_string(),
            version: MessageVersion::from_release(Some("3.0")),
            records: vec![ProductVariant::Legacy(Element::new("Product"))],
        };
        assert_eq!(source.len(), 1);
        assert!(!source.is_empty());
    }
}
