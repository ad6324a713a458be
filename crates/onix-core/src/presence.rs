//! # Presence — Tri-State Field Contract
//!
//! ONIX distinguishes between an element that is missing, an element that
//! exists with no content (`<EditionNumber/>`), and an element that carries
//! a value. Output documents must preserve that distinction: missing
//! structure becomes key absence, while an empty element still produces a
//! key (mapped to `null`).

/// The presence state of a field or attribute in a parsed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence<T> {
    /// The element or attribute does not occur in the record.
    #[default]
    Absent,
    /// The element or attribute occurs but carries no content.
    Empty,
    /// The element or attribute occurs with content.
    Value(T),
}

impl<T> Presence<T> {
    /// Whether the underlying element exists at all (`Empty` or `Value`).
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Whether the underlying element is missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The carried value, if any. `Absent` and `Empty` both yield `None`.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Empty => None,
        }
    }

    /// Borrow the carried value.
    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Self::Absent => Presence::Absent,
            Self::Empty => Presence::Empty,
            Self::Value(v) => Presence::Value(v),
        }
    }

    /// Transform the carried value, keeping the presence state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Presence<U> {
        match self {
            Self::Absent => Presence::Absent,
            Self::Empty => Presence::Empty,
            Self::Value(v) => Presence::Value(f(v)),
        }
    }

    /// Chain a lookup that may itself be absent or empty.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Presence<U>) -> Presence<U> {
        match self {
            Self::Absent => Presence::Absent,
            Self::Empty => Presence::Empty,
            Self::Value(v) => f(v),
        }
    }
}

impl Presence<String> {
    /// Borrow a string value as `&str`.
    pub fn as_deref(&self) -> Presence<&str> {
        self.as_ref().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_does_not_exist() {
        let p: Presence<&str> = Presence::Absent;
        assert!(!p.exists());
        assert!(p.is_absent());
        assert_eq!(p.value(), None);
    }

    #[test]
    fn empty_exists_without_value() {
        let p: Presence<&str> = Presence::Empty;
        assert!(p.exists());
        assert!(!p.is_absent());
        assert_eq!(p.value(), None);
    }

    #[test]
    fn value_exists_with_value() {
        let p = Presence::Value("eng");
        assert!(p.exists());
        assert_eq!(p.value(), Some("eng"));
    }

    #[test]
    fn map_preserves_state() {
        assert_eq!(Presence::<u8>::Absent.map(|v| v + 1), Presence::Absent);
        assert_eq!(Presence::<u8>::Empty.map(|v| v + 1), Presence::Empty);
        assert_eq!(Presence::Value(1u8).map(|v| v + 1), Presence::Value(2));
    }

    #[test]
    fn and_then_can_demote_to_absent() {
        let p = Presence::Value("x").and_then(|_| Presence::<u8>::Absent);
        assert!(p.is_absent());
        let q = Presence::<&str>::Empty.and_then(|_| Presence::Value(1u8));
        assert_eq!(q, Presence::Empty);
    }

    #[test]
    fn as_deref_borrows_string() {
        let owned = Presence::Value("text".to_string());
        assert_eq!(owned.as_deref(), Presence::Value("text"));
    }

    #[test]
    fn default_is_absent() {
        assert_eq!(Presence::<String>::default(), Presence::Absent);
    }
}
