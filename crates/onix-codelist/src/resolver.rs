//! # Resolver
//!
//! Pure lookups over the static tables. Tables are small (tens to a few
//! hundred entries), so a linear scan is used rather than an index.

use std::borrow::Cow;

use crate::list::CodeList;

/// One row of a codelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    /// The code as it appears in ONIX data.
    pub code: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Symbol override, for entries whose derived symbol would collide.
    pub symbol: Option<&'static str>,
}

impl CodeEntry {
    pub(crate) const fn new(code: &'static str, description: &'static str) -> Self {
        Self {
            code,
            description,
            symbol: None,
        }
    }

    pub(crate) const fn with_symbol(
        code: &'static str,
        description: &'static str,
        symbol: &'static str,
    ) -> Self {
        Self {
            code,
            description,
            symbol: Some(symbol),
        }
    }

    /// The symbolic constant name of this entry.
    pub fn symbol(&self) -> Cow<'static, str> {
        match self.symbol {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(derive_symbol(self.description)),
        }
    }
}

/// Look up the full entry for a code.
///
/// Codes are matched exactly after trimming surrounding whitespace.
pub fn entry(list: CodeList, code: &str) -> Option<&'static CodeEntry> {
    let code = code.trim();
    list.entries().iter().find(|e| e.code == code)
}

/// Resolve a code to its description. Unknown codes yield `None`.
pub fn resolve(list: CodeList, code: &str) -> Option<&'static str> {
    entry(list, code).map(|e| e.description)
}

/// Resolve a code to its symbolic constant name. Unknown codes yield `None`.
pub fn symbol(list: CodeList, code: &str) -> Option<Cow<'static, str>> {
    entry(list, code).map(CodeEntry::symbol)
}

/// Derive a symbolic name from a description.
///
/// Every run of characters outside `[A-Za-z0-9]` becomes a single `_`, and
/// leading or trailing underscores are dropped:
/// `Co-publisher’s ISBN-13` becomes `Co_publisher_s_ISBN_13`.
pub fn derive_symbol(description: &str) -> String {
    let mut out = String::with_capacity(description.len());
    let mut pending_sep = false;
    for c in description.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    out
}
