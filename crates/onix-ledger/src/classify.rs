//! # Notification Classifier
//!
//! Decides which ledger a product belongs to from its `<NotificationType>`
//! code (codelist 1). Codes outside the three buckets are not errors; the
//! record is dropped and the router accounts for it.

use onix_core::{Presence, Product};

use crate::router::LedgerKind;

/// The routing decision for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// 01 early, 02 advance (confirmed) or 03 confirmed on publication.
    Full,
    /// 04 update (partial).
    Update,
    /// 05 delete.
    Delete,
    /// Any other code. `None` when the element is absent or empty.
    Dropped(Option<String>),
}

impl Classification {
    /// The target ledger, or `None` for a dropped record.
    pub fn ledger(&self) -> Option<LedgerKind> {
        match self {
            Self::Full => Some(LedgerKind::Full),
            Self::Update => Some(LedgerKind::Update),
            Self::Delete => Some(LedgerKind::Delete),
            Self::Dropped(_) => None,
        }
    }
}

/// Classify a raw notification code.
pub fn classify_code(code: Option<&str>) -> Classification {
    match code.map(str::trim) {
        Some("01" | "02" | "03") => Classification::Full,
        Some("04") => Classification::Update,
        Some("05") => Classification::Delete,
        Some("") | None => Classification::Dropped(None),
        Some(other) => Classification::Dropped(Some(other.to_string())),
    }
}

/// Classify a product by its notification code.
pub fn classify(product: &Product) -> Classification {
    match product.notification_code() {
        Presence::Value(code) => classify_code(Some(&code)),
        Presence::Empty | Presence::Absent => classify_code(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onix_core::Element;

    fn product(code: Option<&str>) -> Product {
        let mut el = Element::new(Product::TAG).with_child(Element::leaf("RecordReference", "r"));
        if let Some(code) = code {
            el = el.with_child(Element::leaf("NotificationType", code));
        }
        Product::new(el)
    }

    #[test]
    fn full_codes() {
        for code in ["01", "02", "03"] {
            assert_eq!(classify(&product(Some(code))), Classification::Full, "{code}");
        }
    }

    #[test]
    fn update_and_delete() {
        assert_eq!(classify(&product(Some("04"))), Classification::Update);
        assert_eq!(classify(&product(Some("05"))), Classification::Delete);
    }

    #[test]
    fn other_codes_are_dropped_with_their_code() {
        for code in ["08", "09", "88", "1", "3"] {
            assert_eq!(
                classify(&product(Some(code))),
                Classification::Dropped(Some(code.to_string()))
            );
        }
    }

    #[test]
    fn absent_or_empty_code_is_dropped() {
        assert_eq!(classify(&product(None)), Classification::Dropped(None));
        assert_eq!(classify(&product(Some(""))), Classification::Dropped(None));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(classify_code(Some(" 04\n")), Classification::Update);
    }

    #[test]
    fn ledger_mapping() {
        assert_eq!(Classification::Full.ledger(), Some(LedgerKind::Full));
        assert_eq!(Classification::Update.ledger(), Some(LedgerKind::Update));
        assert_eq!(Classification::Delete.ledger(), Some(LedgerKind::Delete));
        assert_eq!(Classification::Dropped(None).ledger(), None);
    }
}
