//! # Ledger Router
//!
//! Maps each ONIX 3.x product, classifies it, and appends the document to
//! the matching in-memory [`Ledger`]. Ledgers are append-only and keep
//! routing order. A legacy (non-3.x) record aborts the batch with
//! [`BatchError::UnsupportedRecord`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use onix_core::{BatchError, Presence, Product, ProductVariant};
use onix_mapper::{Document, RecordMapper};

use crate::classify::{classify, Classification};

/// Tally key for a dropped record with no notification code.
pub const ABSENT_CODE: &str = "absent";

// ---------------------------------------------------------------------------
// Ledger kinds
// ---------------------------------------------------------------------------

/// One of the three output ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKind {
    Full,
    Update,
    Delete,
}

impl LedgerKind {
    /// Every kind, in output order.
    pub const ALL: [LedgerKind; 3] = [Self::Full, Self::Update, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Stock file name of the ledger.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Full => "full.jsonl",
            Self::Update => "update.jsonl",
            Self::Delete => "delete.jsonl",
        }
    }
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Ledgers
// ---------------------------------------------------------------------------

/// An append-only sequence of documents for one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    kind: LedgerKind,
    documents: Vec<Document>,
}

impl Ledger {
    pub fn new(kind: LedgerKind) -> Self {
        Self {
            kind,
            documents: Vec::new(),
        }
    }

    pub fn kind(&self) -> LedgerKind {
        self.kind
    }

    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// The three ledgers of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledgers {
    pub full: Ledger,
    pub update: Ledger,
    pub delete: Ledger,
}

impl Default for Ledgers {
    fn default() -> Self {
        Self {
            full: Ledger::new(LedgerKind::Full),
            update: Ledger::new(LedgerKind::Update),
            delete: Ledger::new(LedgerKind::Delete),
        }
    }
}

impl Ledgers {
    pub fn get(&self, kind: LedgerKind) -> &Ledger {
        match kind {
            LedgerKind::Full => &self.full,
            LedgerKind::Update => &self.update,
            LedgerKind::Delete => &self.delete,
        }
    }

    fn get_mut(&mut self, kind: LedgerKind) -> &mut Ledger {
        match kind {
            LedgerKind::Full => &mut self.full,
            LedgerKind::Update => &mut self.update,
            LedgerKind::Delete => &mut self.delete,
        }
    }

    /// The ledgers in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Ledger> {
        LedgerKind::ALL.into_iter().map(|kind| self.get(kind))
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Routing counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouterStats {
    pub full: usize,
    pub update: usize,
    pub delete: usize,
    /// Dropped records per notification code. A missing code is tallied
    /// under [`ABSENT_CODE`].
    pub dropped: BTreeMap<String, usize>,
}

impl RouterStats {
    pub fn routed(&self) -> usize {
        self.full + self.update + self.delete
    }

    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }

    fn count(&mut self, kind: LedgerKind) {
        match kind {
            LedgerKind::Full => self.full += 1,
            LedgerKind::Update => self.update += 1,
            LedgerKind::Delete => self.delete += 1,
        }
    }
}

/// Routes records into ledgers.
#[derive(Debug, Default)]
pub struct Router {
    mapper: RecordMapper,
    ledgers: Ledgers,
    stats: RouterStats,
}

impl Router {
    pub fn new(mapper: RecordMapper) -> Self {
        Self {
            mapper,
            ledgers: Ledgers::default(),
            stats: RouterStats::default(),
        }
    }

    /// Route one record from `source_name`. `data_source` labels the
    /// derived record identifier; `index` is the record's position within
    /// its source, for error reporting.
    pub fn route(
        &mut self,
        record: &ProductVariant,
        source_name: &str,
        data_source: &str,
        index: usize,
    ) -> Result<Classification, BatchError> {
        match record {
            ProductVariant::Onix3(product) => Ok(self.route_product(product, data_source)),
            ProductVariant::Legacy(_) => Err(BatchError::UnsupportedRecord {
                source_name: source_name.to_string(),
                index,
            }),
        }
    }

    /// Classify, map and append one ONIX 3.x product.
    pub fn route_product(&mut self, product: &Product, data_source: &str) -> Classification {
        let classification = classify(product);
        match classification.ledger() {
            Some(kind) => {
                let document = self.mapper.map(product, data_source);
                tracing::debug!(
                    ledger = %kind,
                    record = %reference(product),
                    "routed record"
                );
                self.ledgers.get_mut(kind).push(document);
                self.stats.count(kind);
            }
            None => {
                let code = match &classification {
                    Classification::Dropped(Some(code)) => code.as_str(),
                    _ => ABSENT_CODE,
                };
                tracing::warn!(
                    code = %code,
                    record = %reference(product),
                    "dropped record with unhandled notification type"
                );
                *self.stats.dropped.entry(code.to_string()).or_default() += 1;
            }
        }
        classification
    }

    pub fn ledgers(&self) -> &Ledgers {
        &self.ledgers
    }

    pub fn stats(&self) -> &RouterStats {
        &self.stats
    }

    /// Consume the router, yielding the ledgers and counters.
    pub fn finish(self) -> (Ledgers, RouterStats) {
        (self.ledgers, self.stats)
    }
}

fn reference(product: &Product) -> String {
    match product.record_reference() {
        Presence::Value(r) => r,
        Presence::Empty | Presence::Absent => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onix_core::Element;
    use serde_json::json;

    fn product(reference: &str, code: &str) -> ProductVariant {
        ProductVariant::Onix3(Product::new(
            Element::new(Product::TAG)
                .with_child(Element::leaf("RecordReference", reference))
                .with_child(Element::leaf("NotificationType", code)),
        ))
    }

    fn refs(ledger: &Ledger) -> Vec<&str> {
        ledger
            .documents()
            .iter()
            .filter_map(|d| d["RecordRef"].as_str())
            .collect()
    }

    #[test]
    fn routes_by_notification_code() {
        let mut router = Router::default();
        for (i, (r, code)) in [("a", "03"), ("b", "04"), ("c", "05"), ("d", "01")]
            .into_iter()
            .enumerate()
        {
            router.route(&product(r, code), "f.xml", "src", i).unwrap();
        }
        let (ledgers, stats) = router.finish();
        assert_eq!(refs(&ledgers.full), vec!["a", "d"]);
        assert_eq!(refs(&ledgers.update), vec!["b"]);
        assert_eq!(refs(&ledgers.delete), vec!["c"]);
        assert_eq!(stats.routed(), 4);
        assert_eq!(stats.dropped_total(), 0);
    }

    #[test]
    fn dropped_records_are_tallied_per_code() {
        let mut router = Router::default();
        router.route(&product("a", "08"), "f.xml", "src", 0).unwrap();
        router.route(&product("b", "08"), "f.xml", "src", 1).unwrap();
        router.route(&product("c", "99"), "f.xml", "src", 2).unwrap();
        let bare = ProductVariant::Onix3(Product::new(Element::new(Product::TAG)));
        router.route(&bare, "f.xml", "src", 3).unwrap();

        let stats = router.stats();
        assert_eq!(stats.routed(), 0);
        assert_eq!(stats.dropped["08"], 2);
        assert_eq!(stats.dropped["99"], 1);
        assert_eq!(stats.dropped[ABSENT_CODE], 1);
        assert!(router.ledgers().iter().all(Ledger::is_empty));
    }

    #[test]
    fn legacy_record_is_rejected() {
        let mut router = Router::default();
        let err = router
            .route(&ProductVariant::Legacy(Element::new("Product")), "old.xml", "src", 7)
            .unwrap_err();
        assert_eq!(
            err,
            BatchError::UnsupportedRecord {
                source_name: "old.xml".to_string(),
                index: 7
            }
        );
    }

    #[test]
    fn documents_carry_data_source_label() {
        let mut router = Router::default();
        router.route(&product("x.1", "03"), "f.xml", "Feed", 0).unwrap();
        let doc = &router.ledgers().full.documents()[0];
        assert_eq!(doc["COKI_ID"], json!("Feed_x.1"));
    }

    #[test]
    fn ledgers_iterate_in_output_order() {
        let ledgers = Ledgers::default();
        let kinds: Vec<_> = ledgers.iter().map(Ledger::kind).collect();
        assert_eq!(kinds, LedgerKind::ALL.to_vec());
    }

    #[test]
    fn kind_names() {
        assert_eq!(LedgerKind::Update.to_string(), "update");
        assert_eq!(LedgerKind::Delete.default_file_name(), "delete.jsonl");
    }
}
