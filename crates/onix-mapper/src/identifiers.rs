//! # Identifier Demultiplexer
//!
//! Splits a collection of typed identifier composites
//! (`<ProductIdentifier>`, `<NameIdentifier>`) into a fixed set of named
//! slots. The set of recognized types is a closed whitelist held in an
//! [`IdentifierTable`]; identifiers of any other type are ignored.
//!
//! Two policies govern the output, both configurable through
//! [`IdentifierPolicy`]:
//!
//! - [`DuplicatePolicy`]: which value a slot holds when several identifiers
//!   share a type. Defaults to the first in document order. Under first
//!   and last wins, a blank `IDValue` only fills a slot when no identifier
//!   of that type has a value.
//! - [`MissingSlot`]: whether a slot with no matching identifier is omitted
//!   (default) or emitted as `null`.

use onix_core::{Element, Presence};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A whitelist of identifier types and the output key for each.
#[derive(Debug)]
pub struct IdentifierTable {
    /// Element holding the identifier type code.
    pub type_tag: &'static str,
    /// Element holding the identifier value.
    pub value_tag: &'static str,
    /// `(output key, type code)` pairs, in output order.
    pub slots: &'static [(&'static str, &'static str)],
}

impl IdentifierTable {
    /// The output key for a type code, if the type is recognized.
    pub fn key_for(&self, code: &str) -> Option<&'static str> {
        let code = code.trim();
        self.slots.iter().find(|(_, c)| *c == code).map(|(k, _)| *k)
    }
}

/// Which value wins when several identifiers share a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The first identifier in document order.
    #[default]
    FirstWins,
    /// The last identifier in document order.
    LastWins,
    /// Every value, as an array in document order.
    Collect,
}

/// What a slot with no matching identifier contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSlot {
    /// No key.
    #[default]
    Omit,
    /// The key with a `null` value.
    Null,
}

/// Slot projection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierPolicy {
    /// Duplicate-type handling.
    pub duplicates: DuplicatePolicy,
    /// Missing-slot handling.
    pub missing: MissingSlot,
}

impl IdentifierPolicy {
    /// First-wins, omit-missing.
    pub const DEFAULT: Self = Self {
        duplicates: DuplicatePolicy::FirstWins,
        missing: MissingSlot::Omit,
    };
}

/// Project `entries` through `table` into `out`, one key per slot.
pub fn demux<'e>(
    entries: impl Iterator<Item = &'e Element>,
    table: &IdentifierTable,
    policy: &IdentifierPolicy,
    out: &mut Map<String, Value>,
) {
    let mut found: Vec<Vec<Value>> = vec![Vec::new(); table.slots.len()];
    for entry in entries {
        let Some(code) = entry.field(table.type_tag).value() else {
            continue;
        };
        let Some(slot) = table.slots.iter().position(|(_, c)| *c == code) else {
            tracing::trace!(code = %code, "unrecognized identifier type ignored");
            continue;
        };
        let value = match entry.field(table.value_tag) {
            Presence::Absent => continue,
            Presence::Empty => Value::Null,
            Presence::Value(v) => Value::String(v),
        };
        found[slot].push(value);
    }

    for ((key, _), mut values) in table.slots.iter().zip(found) {
        let slot = match policy.duplicates {
            _ if values.is_empty() => None,
            DuplicatePolicy::FirstWins => {
                let i = values.iter().position(|v| !v.is_null()).unwrap_or(0);
                Some(values.swap_remove(i))
            }
            DuplicatePolicy::LastWins => {
                let last = values.len() - 1;
                let i = values.iter().rposition(|v| !v.is_null()).unwrap_or(last);
                Some(values.swap_remove(i))
            }
            DuplicatePolicy::Collect => Some(Value::Array(values)),
        };
        match (slot, policy.missing) {
            (Some(v), _) => {
                out.insert((*key).to_string(), v);
            }
            (None, MissingSlot::Null) => {
                out.insert((*key).to_string(), Value::Null);
            }
            (None, MissingSlot::Omit) => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Product identifiers, codelist 5.
pub const PRODUCT_IDENTIFIERS: IdentifierTable = IdentifierTable {
    type_tag: "ProductIDType",
    value_tag: "IDValue",
    slots: &[
        ("ISBN13", "15"),
        ("ISBN10", "02"),
        ("DOI", "06"),
        ("ARK", "35"),
        ("BNF_Control_number", "31"),
        ("Co_publisher_s_ISBN_13", "24"),
        ("GTIN_13", "03"),
        ("GTIN_14", "14"),
        ("ISBN_A", "26"),
        ("ISMN_10", "05"),
        ("JP_e_code", "27"),
        ("JP_Magazine_ID", "29"),
        ("LCCN", "13"),
        ("Legal_deposit_number", "17"),
        ("OCLC_number", "23"),
        ("OLCC_number", "28"),
        ("PID_Proprietary", "01"),
        ("UPC", "04"),
        ("UPC12_5", "30"),
        ("URN", "22"),
    ],
};

/// Person and organization name identifiers, codelist 44.
pub const NAME_IDENTIFIERS: IdentifierTable = IdentifierTable {
    type_tag: "NameIDType",
    value_tag: "IDValue",
    slots: &[
        ("ARK", "35"),
        ("B_rsenverein_Verkehrsnummer", "04"),
        ("BNE_CN", "33"),
        ("BNF_Control_Number", "34"),
        ("Centraal_Boekhuis_Relatie_ID", "10"),
        ("DNB_publisher_identifier", "03"),
        ("DUNS", "26"),
        ("EIDR_Party_DOI", "29"),
        ("Fondscode_Boekenbank", "13"),
        ("FundRef_DOI", "32"),
        ("GAPP_Publisher_Identifier", "22"),
        ("German_ISBN_Agency_publisher_identifier", "05"),
        ("GKD", "20"),
        ("GLN", "06"),
        ("GND", "25"),
        ("GRID", "37"),
        ("Identifiant_Editeur_Electre", "28"),
        ("Identifiant_Marque_Electre", "30"),
        ("ISNI", "16"),
        ("Japanese_Publisher_identifier", "19"),
        ("JP_Distribution_Identifier", "24"),
        ("LCCN", "18"),
        ("MARC_organization_code", "08"),
        ("Nasjonalt_autoritetsregister", "36"),
        ("ORCID", "21"),
        ("PND", "17"),
        ("Proprietary", "01"),
        ("Proprietary_", "02"),
        ("Ringgold_ID", "27"),
        ("SAN", "07"),
        ("VAT_Identity_Number", "23"),
        ("VIAF_ID", "31"),
        ("Y_tunnus", "15"),
    ],
};
