//! # Codelist Identifiers
//!
//! One variant per EDItEUR codelist the mapper consults. The enum is the
//! single definition used by every projection rule; adding a list means
//! adding a variant and a table, and the compiler points at every `match`
//! that must learn about it.

use crate::resolver::CodeEntry;
use crate::tables;

/// A numbered ONIX for Books codelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeList {
    /// List 1: notification or update type.
    NotificationType,
    /// List 3: record source type.
    RecordSourceType,
    /// List 5: product identifier type.
    ProductIdentifierType,
    /// List 13: series (collection) identifier type.
    SeriesIdentifierType,
    /// List 14: text case flag.
    TextCase,
    /// List 15: title type.
    TitleType,
    /// List 16: work identifier type.
    WorkIdentifierType,
    /// List 17: contributor role.
    ContributorRole,
    /// List 18: person / organization name type.
    NameType,
    /// List 19: unnamed person(s).
    UnnamedPersons,
    /// List 21: edition type.
    EditionType,
    /// List 22: language role.
    LanguageRole,
    /// List 23: extent type.
    ExtentType,
    /// List 24: extent unit.
    ExtentUnit,
    /// List 26: main subject scheme identifier.
    SubjectSchemeIdentifier,
    /// List 34: text format.
    TextFormat,
    /// List 44: name identifier type.
    NameIdentifierType,
    /// List 45: publishing role.
    PublishingRole,
    /// List 49: region (subset).
    Region,
    /// List 55: date format.
    DateFormat,
    /// List 73: website role.
    WebsiteRole,
    /// List 74: language (subset of ISO 639-2/B).
    Language,
    /// List 91: country (subset of ISO 3166-1).
    Country,
    /// List 121: text script (subset of ISO 15924).
    TextScript,
    /// List 148: collection type.
    CollectionType,
    /// List 149: title element level.
    TitleElementLevel,
    /// List 151: contributor place relator.
    ContributorPlaceRelator,
    /// List 153: text type.
    TextType,
    /// List 163: publishing date role.
    PublishingDateRole,
    /// List 164: work relation.
    WorkRelation,
    /// List 177: person / organization date role.
    PersonDateRole,
    /// List 229: gender.
    Gender,
}

impl CodeList {
    /// Every list carried by this crate, in list-number order.
    pub fn all() -> &'static [CodeList] {
        &[
            Self::NotificationType,
            Self::RecordSourceType,
            Self::ProductIdentifierType,
            Self::SeriesIdentifierType,
            Self::TextCase,
            Self::TitleType,
            Self::WorkIdentifierType,
            Self::ContributorRole,
            Self::NameType,
            Self::UnnamedPersons,
            Self::EditionType,
            Self::LanguageRole,
            Self::ExtentType,
            Self::ExtentUnit,
            Self::SubjectSchemeIdentifier,
            Self::TextFormat,
            Self::NameIdentifierType,
            Self::PublishingRole,
            Self::Region,
            Self::DateFormat,
            Self::WebsiteRole,
            Self::Language,
            Self::Country,
            Self::TextScript,
            Self::CollectionType,
            Self::TitleElementLevel,
            Self::ContributorPlaceRelator,
            Self::TextType,
            Self::PublishingDateRole,
            Self::WorkRelation,
            Self::PersonDateRole,
            Self::Gender,
        ]
    }

    /// The EDItEUR list number.
    pub fn number(self) -> u16 {
        match self {
            Self::NotificationType => 1,
            Self::RecordSourceType => 3,
            Self::ProductIdentifierType => 5,
            Self::SeriesIdentifierType => 13,
            Self::TextCase => 14,
            Self::TitleType => 15,
            Self::WorkIdentifierType => 16,
            Self::ContributorRole => 17,
            Self::NameType => 18,
            Self::UnnamedPersons => 19,
            Self::EditionType => 21,
            Self::LanguageRole => 22,
            Self::ExtentType => 23,
            Self::ExtentUnit => 24,
            Self::SubjectSchemeIdentifier => 26,
            Self::TextFormat => 34,
            Self::NameIdentifierType => 44,
            Self::PublishingRole => 45,
            Self::Region => 49,
            Self::DateFormat => 55,
            Self::WebsiteRole => 73,
            Self::Language => 74,
            Self::Country => 91,
            Self::TextScript => 121,
            Self::CollectionType => 148,
            Self::TitleElementLevel => 149,
            Self::ContributorPlaceRelator => 151,
            Self::TextType => 153,
            Self::PublishingDateRole => 163,
            Self::WorkRelation => 164,
            Self::PersonDateRole => 177,
            Self::Gender => 229,
        }
    }

    /// The list with the given EDItEUR number, if this crate carries it.
    pub fn from_number(number: u16) -> Option<CodeList> {
        Self::all().iter().copied().find(|l| l.number() == number)
    }

    /// The entries of this list.
    pub fn entries(self) -> &'static [CodeEntry] {
        match self {
            Self::NotificationType => tables::NOTIFICATION_TYPE,
            Self::RecordSourceType => tables::RECORD_SOURCE_TYPE,
            Self::ProductIdentifierType => tables::PRODUCT_IDENTIFIER_TYPE,
            Self::SeriesIdentifierType => tables::SERIES_IDENTIFIER_TYPE,
            Self::TextCase => tables::TEXT_CASE,
            Self::TitleType => tables::TITLE_TYPE,
            Self::WorkIdentifierType => tables::WORK_IDENTIFIER_TYPE,
            Self::ContributorRole => tables::CONTRIBUTOR_ROLE,
            Self::NameType => tables::NAME_TYPE,
            Self::UnnamedPersons => tables::UNNAMED_PERSONS,
            Self::EditionType => tables::EDITION_TYPE,
            Self::LanguageRole => tables::LANGUAGE_ROLE,
            Self::ExtentType => tables::EXTENT_TYPE,
            Self::ExtentUnit => tables::EXTENT_UNIT,
            Self::SubjectSchemeIdentifier => tables::SUBJECT_SCHEME_IDENTIFIER,
            Self::TextFormat => tables::TEXT_FORMAT,
            Self::NameIdentifierType => tables::NAME_IDENTIFIER_TYPE,
            Self::PublishingRole => tables::PUBLISHING_ROLE,
            Self::Region => tables::REGION,
            Self::DateFormat => tables::DATE_FORMAT,
            Self::WebsiteRole => tables::WEBSITE_ROLE,
            Self::Language => tables::LANGUAGE,
            Self::Country => tables::COUNTRY,
            Self::TextScript => tables::TEXT_SCRIPT,
            Self::CollectionType => tables::COLLECTION_TYPE,
            Self::TitleElementLevel => tables::TITLE_ELEMENT_LEVEL,
            Self::ContributorPlaceRelator => tables::CONTRIBUTOR_PLACE_RELATOR,
            Self::TextType => tables::TEXT_TYPE,
            Self::PublishingDateRole => tables::PUBLISHING_DATE_ROLE,
            Self::WorkRelation => tables::WORK_RELATION,
            Self::PersonDateRole => tables::PERSON_DATE_ROLE,
            Self::Gender => tables::GENDER,
        }
    }
}

impl std::fmt::Display for CodeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "List {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_number() {
        assert_eq!(CodeList::from_number(1), Some(CodeList::NotificationType));
        assert_eq!(CodeList::from_number(229), Some(CodeList::Gender));
        assert_eq!(CodeList::from_number(2), None);
    }

    #[test]
    fn all_lists_have_entries() {
        for list in CodeList::all() {
            assert!(!list.entries().is_empty(), "{list} has no entries");
        }
    }

    #[test]
    fn list_numbers_are_unique_and_sorted() {
        let numbers: Vec<u16> = CodeList::all().iter().map(|l| l.number()).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn codes_are_unique_within_each_list() {
        for list in CodeList::all() {
            let mut codes: Vec<&str> = list.entries().iter().map(|e| e.code).collect();
            let before = codes.len();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(before, codes.len(), "{list} has duplicate codes");
        }
    }

    #[test]
    fn display_uses_list_number() {
        assert_eq!(CodeList::NotificationType.to_string(), "List 1");
        assert_eq!(CodeList::Gender.to_string(), "List 229");
    }
}
