//! # Section Shapes
//!
//! The ONIX 3.0 `<Product>` layout, declared as [`Shape`]s. The record
//! mapper projects a product through [`PRODUCT`]; everything else here is a
//! nested composite reached from it.
//!
//! Output key names are fixed by downstream tables, including the historic
//! spellings `CorprorateName`, `CorprorateNameInverted` and
//! `CollectionIdentifers`. Do not correct them.

use onix_codelist::CodeList;

use crate::identifiers::{NAME_IDENTIFIERS, PRODUCT_IDENTIFIERS};
use crate::projector::{Form, Rule, Shape};

// ── Rule constructors ────────────────────────────────────────────────

const fn text(tag: &'static str, key: &'static str) -> Rule {
    Rule::Text { tag, key }
}

const fn number(tag: &'static str, key: &'static str) -> Rule {
    Rule::Number { tag, key }
}

const fn described(tag: &'static str, key: &'static str, list: CodeList) -> Rule {
    Rule::Coded {
        tag,
        key,
        list,
        form: Form::Description,
    }
}

const fn raw_code(tag: &'static str, key: &'static str, list: CodeList) -> Rule {
    Rule::Coded {
        tag,
        key,
        list,
        form: Form::Code,
    }
}

const fn symbolic(tag: &'static str, key: &'static str, list: CodeList) -> Rule {
    Rule::Coded {
        tag,
        key,
        list,
        form: Form::Symbol,
    }
}

const fn attr(name: &'static str, key: &'static str, list: CodeList) -> Rule {
    Rule::Attribute {
        name,
        key,
        list: Some(list),
        form: Form::Description,
    }
}

const fn raw_attr(name: &'static str, key: &'static str) -> Rule {
    Rule::Attribute {
        name,
        key,
        list: None,
        form: Form::Code,
    }
}

const fn list(tag: &'static str, key: &'static str, shape: Shape) -> Rule {
    Rule::List { tag, key, shape }
}

const fn texts(tag: &'static str, key: &'static str) -> Rule {
    Rule::Texts { tag, key }
}

const fn inline(tag: &'static str, shape: Shape) -> Rule {
    Rule::Inline { tag, shape }
}

const fn block(tag: &'static str, shape: Shape) -> Rule {
    Rule::Block { tag, shape }
}

const fn object(tag: &'static str, key: &'static str, shape: Shape) -> Rule {
    Rule::Object { tag, key, shape }
}

// ── Product ──────────────────────────────────────────────────────────

/// The whole product record, minus the derived `COKI_ID`.
pub const PRODUCT: Shape = &[
    text("RecordSourceName", "RecordSourceName"),
    described("RecordSourceType", "RecordSourceType", CodeList::RecordSourceType),
    inline("RecordReference", RECORD_REFERENCE),
    Rule::Slots {
        tag: "ProductIdentifier",
        table: &PRODUCT_IDENTIFIERS,
    },
    inline("CollateralDetail", COLLATERAL_DETAIL),
    block("DescriptiveDetail", DESCRIPTIVE_DETAIL),
    block("RelatedMaterial", RELATED_MATERIAL),
    inline("PublishingDetail", PUBLISHING_DETAIL),
];

const RECORD_REFERENCE: Shape = &[
    Rule::Value { key: "RecordRef" },
    raw_attr("sourcename", "RecordRef_src"),
    raw_attr("datestamp", "RecordRef_ts"),
    attr("sourcetype", "RecordRef_src_type", CodeList::RecordSourceType),
];

// ── Collateral detail ────────────────────────────────────────────────

const COLLATERAL_DETAIL: Shape = &[list("TextContent", "TextContent", TEXT_CONTENT)];

const TEXT_CONTENT: Shape = &[
    texts("Text", "Text"),
    described("TextType", "TextType", CodeList::TextType),
];

// ── Descriptive detail ───────────────────────────────────────────────

const DESCRIPTIVE_DETAIL: Shape = &[
    number("EditionNumber", "EditionNumber"),
    text("EditionVersionNumber", "EditionVersionNumber"),
    Rule::Unless {
        marker: "NoContributor",
        rule: &Rule::List {
            tag: "Contributor",
            key: "Contributors",
            shape: CONTRIBUTOR,
        },
    },
    list("Subject", "Subjects", SUBJECT),
    raw_code("CountryOfManufacture", "CountryOfManufacture", CodeList::Country),
    list("TitleDetail", "TitleDetails", TITLE_DETAIL),
    list("Language", "Languages", LANGUAGE),
    Rule::CodedList {
        tag: "EditionType",
        key: "EditionType",
        list: CodeList::EditionType,
    },
    list("Extent", "Extent", EXTENT),
    Rule::Unless {
        marker: "NoCollection",
        rule: &Rule::List {
            tag: "Collection",
            key: "Collections",
            shape: COLLECTION,
        },
    },
];

const SUBJECT: Shape = &[
    Rule::Flag {
        tag: "MainSubject",
        key: "MainSubject",
    },
    text("SubjectCode", "SubjectCode"),
    texts("SubjectHeadingText", "SubjectHeadingText"),
    symbolic(
        "SubjectSchemeIdentifier",
        "SubjectSchemeIdentifier",
        CodeList::SubjectSchemeIdentifier,
    ),
    text("SubjectSchemeVersion", "SubjectSchemeVersion"),
    inline("SubjectSchemeName", SUBJECT_SCHEME_NAME),
];

const SUBJECT_SCHEME_NAME: Shape = &[
    Rule::Value {
        key: "SubjectSchemeName",
    },
    attr("language", "SubjectSchemeNameLanguage", CodeList::Language),
];

const LANGUAGE: Shape = &[
    raw_code("CountryCode", "CountryCode", CodeList::Country),
    raw_code("LanguageCode", "LanguageCode", CodeList::Language),
    described("LanguageRole", "LanguageRole", CodeList::LanguageRole),
    described("ScriptCode", "ScriptCode", CodeList::TextScript),
];

const EXTENT: Shape = &[
    described("ExtentType", "ExtentType", CodeList::ExtentType),
    described("ExtentUnit", "ExtentUnit", CodeList::ExtentUnit),
    number("ExtentValue", "ExtentValue"),
    text("ExtentValueRoman", "ExtentValueRoman"),
];

const COLLECTION: Shape = &[
    described("CollectionType", "CollectionType", CodeList::CollectionType),
    list(
        "CollectionIdentifier",
        "CollectionIdentifers",
        COLLECTION_IDENTIFIER,
    ),
    list("TitleDetail", "TitleDetails", TITLE_DETAIL),
];

const COLLECTION_IDENTIFIER: Shape = &[
    symbolic(
        "CollectionIDType",
        "CollectionIdType",
        CodeList::SeriesIdentifierType,
    ),
    text("IDTypeName", "IDTypeName"),
    text("IDValue", "IDValue"),
];

// ── Titles ───────────────────────────────────────────────────────────

const TITLE_DETAIL: Shape = &[
    described("TitleType", "TitleType", CodeList::TitleType),
    text("TitleStatement", "TitleStatement"),
    list("TitleElement", "TitleElements", TITLE_ELEMENT),
];

const TITLE_ELEMENT: Shape = &[
    number("SequenceNumber", "SequenceNumber"),
    described(
        "TitleElementLevel",
        "TitleElementLevel",
        CodeList::TitleElementLevel,
    ),
    text("YearOfAnnual", "YearOfAnnual"),
    object("PartNumber", "PartNumber", PART_NUMBER),
    inline("Subtitle", SUBTITLE),
    object("TitlePrefix", "TitlePrefix", TITLE_PREFIX),
    inline("TitleWithoutPrefix", TITLE_WITHOUT_PREFIX),
    inline("TitleText", TITLE_TEXT),
];

const PART_NUMBER: Shape = &[
    attr("language", "Language", CodeList::Language),
    attr("textscript", "TextScript", CodeList::TextScript),
    Rule::Value { key: "Value" },
];

const SUBTITLE: Shape = &[
    attr("language", "Subtitle_Language", CodeList::Language),
    attr("textscript", "Subtitle_TextScript", CodeList::TextScript),
    attr("textcase", "Subtitle_TextCaseFlags", CodeList::TextCase),
    Rule::Value { key: "Subtitle" },
];

const TITLE_PREFIX: Shape = &[
    attr("language", "Language", CodeList::Language),
    attr("textscript", "TextScript", CodeList::TextScript),
    attr("textcase", "TextCaseFlags", CodeList::TextCase),
    Rule::Value { key: "Value" },
];

const TITLE_WITHOUT_PREFIX: Shape = &[
    attr("language", "TitleWithoutPrefix_LanguageCode", CodeList::Language),
    attr("textscript", "TitleWithoutPrefix_TextScript", CodeList::TextScript),
    attr("textcase", "TitleWithoutPrefix_TextCaseFlags", CodeList::TextCase),
    Rule::Value {
        key: "TitleWithoutPrefix",
    },
];

const TITLE_TEXT: Shape = &[
    attr("language", "TitleText_Language", CodeList::Language),
    attr("textscript", "TitleText_TextScript", CodeList::TextScript),
    attr("textcase", "TitleText_TextCaseFlags", CodeList::TextCase),
    Rule::Value { key: "TitleText" },
];

// ── Contributors ─────────────────────────────────────────────────────

const CONTRIBUTOR: Shape = &[
    text("PersonName", "PersonName"),
    text("PersonNameInverted", "PersonNameInverted"),
    text("NamesAfterKey", "NamesAfterKey"),
    text("NamesBeforeKey", "NamesBeforeKey"),
    described("NameType", "NameType", CodeList::NameType),
    text("LettersAfterNames", "LettersAfterNames"),
    text("KeyNames", "KeyNames"),
    text("CorporateName", "CorprorateName"),
    text("CorporateNameInverted", "CorprorateNameInverted"),
    described("UnnamedPersons", "UnnamedPersons", CodeList::UnnamedPersons),
    described("Gender", "Gender", CodeList::Gender),
    number("SequenceNumber", "SequenceNumber"),
    text("TitlesBeforeNames", "TitlesBeforeNames"),
    text("TitlesAfterNames", "TitlesAfterNames"),
    text("PrefixToKey", "PrefixToKey"),
    text("SuffixToKey", "SuffixToKey"),
    list("ContributorDate", "Dates", CONTRIBUTOR_DATE),
    Rule::CodedList {
        tag: "ContributorRole",
        key: "Roles",
        list: CodeList::ContributorRole,
    },
    list("ContributorPlace", "Places", CONTRIBUTOR_PLACE),
    Rule::Slots {
        tag: "NameIdentifier",
        table: &NAME_IDENTIFIERS,
    },
    list(
        "ProfessionalAffiliation",
        "ProfessionalAffiliations",
        PROFESSIONAL_AFFILIATION,
    ),
    list("AlternativeName", "AlternativeNames", ALTERNATIVE_NAME),
    list("Website", "Websites", WEBSITE),
    list("BiographicalNote", "BiographicalNotes", BIOGRAPHICAL_NOTE),
];

const CONTRIBUTOR_DATE: Shape = &[
    described("ContributorDateRole", "Role", CodeList::PersonDateRole),
    text("Date", "Date"),
    described("DateFormat", "Format", CodeList::DateFormat),
];

const CONTRIBUTOR_PLACE: Shape = &[
    described(
        "ContributorPlaceRelator",
        "Relation",
        CodeList::ContributorPlaceRelator,
    ),
    described("CountryCode", "CountryCode", CodeList::Country),
    described("RegionCode", "RegionCode", CodeList::Region),
    texts("LocationName", "Locations"),
];

const PROFESSIONAL_AFFILIATION: Shape = &[
    text("Affiliation", "Affiliations"),
    texts("ProfessionalPosition", "Positions"),
];

const ALTERNATIVE_NAME: Shape = &[
    text("CorporateName", "CorprorateName"),
    text("CorporateNameInverted", "CorprorateNameInverted"),
    described("Gender", "Gender", CodeList::Gender),
    text("KeyNames", "KeyNames"),
    text("LettersAfterNames", "LettersAfterNames"),
    Rule::Slots {
        tag: "NameIdentifier",
        table: &NAME_IDENTIFIERS,
    },
    text("NamesAfterKey", "NamesAfterKey"),
    text("NamesBeforeKey", "NamesBeforeKey"),
    described("NameType", "NameType", CodeList::NameType),
    text("PersonName", "PersonName"),
    text("PersonNameInverted", "PersonNameInverted"),
    text("PrefixToKey", "PrefixToKey"),
    text("SuffixToKey", "SuffixToKey"),
    text("TitlesBeforeNames", "TitlesBeforeNames"),
    text("TitlesAfterNames", "TitlesAfterNames"),
];

const WEBSITE: Shape = &[
    described("WebsiteRole", "WebsiteRole", CodeList::WebsiteRole),
    texts("WebsiteDescription", "WebsiteDescriptions"),
    texts("WebsiteLink", "WebsiteLinks"),
];

const BIOGRAPHICAL_NOTE: Shape = &[
    attr("language", "Language", CodeList::Language),
    attr("textformat", "TextFormat", CodeList::TextFormat),
    Rule::Value { key: "Note" },
];

// ── Related material ─────────────────────────────────────────────────

const RELATED_MATERIAL: Shape = &[list("RelatedWork", "RelatedWorks", RELATED_WORK)];

const RELATED_WORK: Shape = &[
    described("WorkRelationCode", "WorkRelationCode", CodeList::WorkRelation),
    list("WorkIdentifier", "WorkIdentifiers", WORK_IDENTIFIER),
];

const WORK_IDENTIFIER: Shape = &[
    text("IDTypeName", "IDTypeName"),
    text("IDValue", "IDValue"),
    described("WorkIDType", "WorkIDType", CodeList::WorkIdentifierType),
];

// ── Publishing detail ────────────────────────────────────────────────

const PUBLISHING_DETAIL: Shape = &[
    texts("CityOfPublication", "CityOfPublications"),
    list("Imprint", "Imprints", IMPRINT),
    list("Publisher", "Publishers", PUBLISHER),
    list("PublishingDate", "PublishingDates", PUBLISHING_DATE),
];

const IMPRINT: Shape = &[
    inline("ImprintName", IMPRINT_NAME),
    list("ImprintIdentifier", "ImprintIdentifiers", IMPRINT_IDENTIFIER),
];

const IMPRINT_NAME: Shape = &[
    Rule::Value { key: "ImprintName" },
    attr("language", "ImprintName_lang", CodeList::Language),
];

const IMPRINT_IDENTIFIER: Shape = &[
    text("IDTypeName", "IDTypeName"),
    text("IDValue", "IDValue"),
    symbolic("ImprintIDType", "ImprintIDType", CodeList::NameIdentifierType),
];

const PUBLISHER: Shape = &[
    text("PublisherName", "PublisherName"),
    described("PublishingRole", "PublishingRole", CodeList::PublishingRole),
    list("Website", "Websites", WEBSITE),
];

const PUBLISHING_DATE: Shape = &[
    text("Date", "Date"),
    described("DateFormat", "DateFormat", CodeList::DateFormat),
    described(
        "PublishingDateRole",
        "PublishingDateRole",
        CodeList::PublishingDateRole,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(shape: Shape) -> Vec<&'static str> {
        shape
            .iter()
            .filter_map(|rule| match rule {
                Rule::Text { key, .. }
                | Rule::Number { key, .. }
                | Rule::Flag { key, .. }
                | Rule::Coded { key, .. }
                | Rule::Attribute { key, .. }
                | Rule::Value { key }
                | Rule::Object { key, .. }
                | Rule::List { key, .. }
                | Rule::Texts { key, .. }
                | Rule::CodedList { key, .. } => Some(*key),
                Rule::Inline { .. }
                | Rule::Block { .. }
                | Rule::Slots { .. } | Rule::Unless { .. } => None,
            })
            .collect()
    }

    #[test]
    fn historic_key_spellings_are_kept() {
        assert!(keys(CONTRIBUTOR).contains(&"CorprorateName"));
        assert!(keys(CONTRIBUTOR).contains(&"CorprorateNameInverted"));
        assert!(keys(ALTERNATIVE_NAME).contains(&"CorprorateName"));
        assert!(keys(COLLECTION).contains(&"CollectionIdentifers"));
    }

    #[test]
    fn keys_are_unique_within_each_shape() {
        for shape in [
            CONTRIBUTOR,
            ALTERNATIVE_NAME,
            TITLE_ELEMENT,
            DESCRIPTIVE_DETAIL,
            SUBJECT,
            PUBLISHING_DETAIL,
        ] {
            let mut k = keys(shape);
            let before = k.len();
            k.sort_unstable();
            k.dedup();
            assert_eq!(before, k.len());
        }
    }
}
