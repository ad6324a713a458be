//! # Composite Projector
//!
//! A generic recursive engine that turns an [`Element`] sub-tree into JSON,
//! driven by a [`Shape`]: a static slice of [`Rule`]s. Every section of the
//! record mapper is a `Shape`; none is hand-coded.
//!
//! ## Presence Rules
//!
//! These hold for every shape by construction:
//!
//! 1. A singular optional composite ([`Rule::Object`], [`Rule::Inline`])
//!    that is absent contributes no key, never an empty object. A
//!    [`Rule::Block`] is projected over an empty element instead, so its
//!    repeated sections still appear.
//! 2. A repeated composite ([`Rule::List`]) always contributes an array,
//!    `[]` when there are no repetitions.
//! 3. A scalar that is present is emitted even when empty (as `null`);
//!    an absent scalar is omitted.
//! 4. A coded field in description or symbol form is emitted only when the
//!    code resolves. Raw code form follows rule 3.
//! 5. Repeated bare scalars ([`Rule::Texts`], [`Rule::CodedList`]) collapse
//!    to a plain array of strings.
//!
//! Output keys are inserted in rule order, so a document's key order is the
//! order its shapes declare.

use onix_codelist::{resolve, symbol, CodeList};
use onix_core::{Element, Presence};
use serde_json::{Map, Number, Value};

use crate::identifiers::{demux, IdentifierPolicy, IdentifierTable};

/// A declarative description of one composite.
pub type Shape = &'static [Rule];

/// How a coded value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// The codelist description (`"By (author)"`).
    Description,
    /// The raw code as it appears in the record (`"eng"`).
    Code,
    /// The codelist symbol (`"BISAC_Subject_Heading"`).
    Symbol,
}

/// One extraction step of a [`Shape`].
#[derive(Debug)]
pub enum Rule {
    /// Child element text as a string.
    Text {
        tag: &'static str,
        key: &'static str,
    },
    /// Child element text as a JSON number, falling back to the raw string.
    Number {
        tag: &'static str,
        key: &'static str,
    },
    /// Whether a child element occurs. Always emitted.
    Flag {
        tag: &'static str,
        key: &'static str,
    },
    /// Child element holding a code from `list`.
    Coded {
        tag: &'static str,
        key: &'static str,
        list: CodeList,
        form: Form,
    },
    /// An attribute of the current element. `list: None` emits the raw value.
    Attribute {
        name: &'static str,
        key: &'static str,
        list: Option<CodeList>,
        form: Form,
    },
    /// The current element's own content.
    Value { key: &'static str },
    /// A singular child composite as a nested object.
    Object {
        tag: &'static str,
        key: &'static str,
        shape: Shape,
    },
    /// A singular child composite whose keys merge into the parent.
    Inline { tag: &'static str, shape: Shape },
    /// Like [`Rule::Inline`], but an absent child is treated as an empty
    /// one.
    Block { tag: &'static str, shape: Shape },
    /// Repeated child composites as an array of objects.
    List {
        tag: &'static str,
        key: &'static str,
        shape: Shape,
    },
    /// Repeated child scalars as an array of strings.
    Texts {
        tag: &'static str,
        key: &'static str,
    },
    /// Repeated child codes as an array of descriptions. Unknown codes are
    /// skipped.
    CodedList {
        tag: &'static str,
        key: &'static str,
        list: CodeList,
    },
    /// Typed identifier composites split into named slots on the parent.
    Slots {
        tag: &'static str,
        table: &'static IdentifierTable,
    },
    /// Apply `rule` only when the `marker` element is absent.
    Unless {
        marker: &'static str,
        rule: &'static Rule,
    },
}

/// Applies shapes to elements.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'p> {
    identifiers: &'p IdentifierPolicy,
}

impl<'p> Projector<'p> {
    /// Create a projector using the given identifier policy for slot rules.
    pub fn new(identifiers: &'p IdentifierPolicy) -> Self {
        Self { identifiers }
    }

    /// Project `element` through `shape` into a fresh object.
    pub fn object(&self, element: &Element, shape: Shape) -> Map<String, Value> {
        let mut out = Map::new();
        self.project_into(element, shape, &mut out);
        out
    }

    /// Project `element` through `shape`, appending keys to `out`.
    pub fn project_into(&self, element: &Element, shape: Shape, out: &mut Map<String, Value>) {
        for rule in shape {
            self.apply(element, rule, out);
        }
    }

    fn apply(&self, element: &Element, rule: &Rule, out: &mut Map<String, Value>) {
        match rule {
            Rule::Text { tag, key } => {
                if let Some(v) = scalar(element.field(tag), Value::String) {
                    out.insert((*key).to_string(), v);
                }
            }
            Rule::Number { tag, key } => {
                if let Some(v) = scalar(element.field(tag), |s| number(&s)) {
                    out.insert((*key).to_string(), v);
                }
            }
            Rule::Flag { tag, key } => {
                out.insert((*key).to_string(), Value::Bool(element.has_child(tag)));
            }
            Rule::Coded {
                tag,
                key,
                list,
                form,
            } => {
                let field = element.field(tag);
                if let Some(v) = coded(field.as_deref(), Some(*list), *form) {
                    out.insert((*key).to_string(), v);
                }
            }
            Rule::Attribute {
                name,
                key,
                list,
                form,
            } => {
                if let Some(v) = coded(element.attribute(name), *list, *form) {
                    out.insert((*key).to_string(), v);
                }
            }
            Rule::Value { key } => {
                if let Some(v) = scalar(element.text(), Value::String) {
                    out.insert((*key).to_string(), v);
                }
            }
            Rule::Object { tag, key, shape } => {
                if let Some(child) = element.child(tag) {
                    out.insert((*key).to_string(), Value::Object(self.object(child, shape)));
                }
            }
            Rule::Inline { tag, shape } => {
                if let Some(child) = element.child(tag) {
                    self.project_into(child, shape, out);
                }
            }
            Rule::Block { tag, shape } => match element.child(tag) {
                Some(child) => self.project_into(child, shape, out),
                None => self.project_into(&Element::new(*tag), shape, out),
            },
            Rule::List { tag, key, shape } => {
                let items = element
                    .children(tag)
                    .map(|child| Value::Object(self.object(child, shape)))
                    .collect();
                out.insert((*key).to_string(), Value::Array(items));
            }
            Rule::Texts { tag, key } => {
                let items = element
                    .children(tag)
                    .filter_map(|child| scalar(child.text(), Value::String))
                    .collect();
                out.insert((*key).to_string(), Value::Array(items));
            }
            Rule::CodedList { tag, key, list } => {
                let items = element
                    .children(tag)
                    .filter_map(|child| {
                        let code = child.text().value()?;
                        resolve(*list, &code).map(|d| Value::String(d.to_string()))
                    })
                    .collect();
                out.insert((*key).to_string(), Value::Array(items));
            }
            Rule::Slots { tag, table } => {
                demux(element.children(tag), table, self.identifiers, out);
            }
            Rule::Unless { marker, rule } => {
                if !element.has_child(marker) {
                    self.apply(element, rule, out);
                }
            }
        }
    }
}

/// Rule 3: absent → no key, empty → `null`, value → rendered.
fn scalar(field: Presence<String>, render: impl FnOnce(String) -> Value) -> Option<Value> {
    match field {
        Presence::Absent => None,
        Presence::Empty => Some(Value::Null),
        Presence::Value(s) => Some(render(s)),
    }
}

/// Rule 4 for codes held in elements or attributes.
fn coded(field: Presence<&str>, list: Option<CodeList>, form: Form) -> Option<Value> {
    let code = match field {
        Presence::Absent => return None,
        Presence::Empty => {
            return match (list, form) {
                (None, _) | (_, Form::Code) => Some(Value::Null),
                _ => None,
            }
        }
        Presence::Value(code) => code,
    };
    let rendered = match (list, form) {
        (None, _) | (_, Form::Code) => Some(code.to_string()),
        (Some(list), Form::Description) => resolve(list, code).map(str::to_string),
        (Some(list), Form::Symbol) => symbol(list, code).map(|s| s.into_owned()),
    };
    if rendered.is_none() {
        tracing::trace!(code, list = ?list, "unresolved code omitted");
    }
    rendered.map(Value::String)
}

/// Integers stay integers; decimals become floats; anything else is kept
/// verbatim.
fn number(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(i.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static POLICY: IdentifierPolicy = IdentifierPolicy::DEFAULT;

    const NOTE: Shape = &[
        Rule::Attribute {
            name: "language",
            key: "Language",
            list: Some(CodeList::Language),
            form: Form::Description,
        },
        Rule::Attribute {
            name: "textformat",
            key: "TextFormat",
            list: Some(CodeList::TextFormat),
            form: Form::Description,
        },
        Rule::Value { key: "Note" },
    ];

    const WEBSITE: Shape = &[
        Rule::Coded {
            tag: "WebsiteRole",
            key: "WebsiteRole",
            list: CodeList::WebsiteRole,
            form: Form::Description,
        },
        Rule::Texts {
            tag: "WebsiteLink",
            key: "WebsiteLinks",
        },
    ];

    const PERSON: Shape = &[
        Rule::Text {
            tag: "KeyNames",
            key: "KeyNames",
        },
        Rule::Number {
            tag: "SequenceNumber",
            key: "SequenceNumber",
        },
        Rule::CodedList {
            tag: "ContributorRole",
            key: "Roles",
            list: CodeList::ContributorRole,
        },
        Rule::List {
            tag: "Website",
            key: "Websites",
            shape: WEBSITE,
        },
        Rule::List {
            tag: "BiographicalNote",
            key: "BiographicalNotes",
            shape: NOTE,
        },
        Rule::Object {
            tag: "Prize",
            key: "Prize",
            shape: &[Rule::Text {
                tag: "PrizeName",
                key: "PrizeName",
            }],
        },
        Rule::Inline {
            tag: "Place",
            shape: &[Rule::Coded {
                tag: "CountryCode",
                key: "CountryCode",
                list: CodeList::Country,
                form: Form::Code,
            }],
        },
    ];

    fn project(element: &Element, shape: Shape) -> Value {
        Value::Object(Projector::new(&POLICY).object(element, shape))
    }

    #[test]
    fn absent_scalars_are_omitted_and_lists_are_empty() {
        let out = project(&Element::new("Contributor"), PERSON);
        assert_eq!(
            out,
            json!({
                "Roles": [],
                "Websites": [],
                "BiographicalNotes": []
            })
        );
    }

    #[test]
    fn empty_scalar_is_null() {
        let e = Element::new("Contributor").with_child(Element::new("KeyNames"));
        let out = project(&e, PERSON);
        assert_eq!(out["KeyNames"], Value::Null);
    }

    #[test]
    fn numbers_parse_and_fall_back_to_strings() {
        assert_eq!(number("1"), json!(1));
        assert_eq!(number("2.5"), json!(2.5));
        assert_eq!(number("xii"), json!("xii"));
        assert_eq!(number("NaN"), json!("NaN"));
    }

    #[test]
    fn nested_composites_are_mapped_in_order() {
        let e = Element::new("Contributor")
            .with_child(Element::leaf("SequenceNumber", "2"))
            .with_child(Element::leaf("ContributorRole", "A01"))
            .with_child(Element::leaf("ContributorRole", "ZZZ"))
            .with_child(Element::leaf("ContributorRole", "B06"))
            .with_child(
                Element::new("Website")
                    .with_child(Element::leaf("WebsiteRole", "06"))
                    .with_child(Element::leaf("WebsiteLink", "https://a.example"))
                    .with_child(Element::leaf("WebsiteLink", "https://b.example")),
            )
            .with_child(
                Element::new("BiographicalNote")
                    .with_attribute("textformat", "05")
                    .with_child(Element::leaf("p", "Some note.")),
            );
        let out = project(&e, PERSON);
        assert_eq!(out["SequenceNumber"], json!(2));
        assert_eq!(out["Roles"], json!(["By (author)", "Translated by"]));
        assert_eq!(
            out["Websites"],
            json!([{
                "WebsiteRole": "Contributor\u{2019}s own website",
                "WebsiteLinks": ["https://a.example", "https://b.example"]
            }])
        );
        assert_eq!(
            out["BiographicalNotes"],
            json!([{ "TextFormat": "XHTML", "Note": "<p>Some note.</p>" }])
        );
    }

    #[test]
    fn singular_composites() {
        let e = Element::new("Contributor")
            .with_child(Element::new("Prize").with_child(Element::leaf("PrizeName", "Booker")))
            .with_child(Element::new("Place").with_child(Element::leaf("CountryCode", "NZ")));
        let out = project(&e, PERSON);
        assert_eq!(out["Prize"], json!({ "PrizeName": "Booker" }));
        assert_eq!(out["CountryCode"], json!("NZ"));
    }

    #[test]
    fn absent_block_still_emits_its_lists() {
        const PARENT: Shape = &[
            Rule::Inline {
                tag: "Optional",
                shape: &[Rule::Texts {
                    tag: "City",
                    key: "Cities",
                }],
            },
            Rule::Block {
                tag: "Required",
                shape: &[
                    Rule::Text {
                        tag: "Name",
                        key: "Name",
                    },
                    Rule::Texts {
                        tag: "Role",
                        key: "Roles",
                    },
                ],
            },
        ];
        assert_eq!(project(&Element::new("P"), PARENT), json!({ "Roles": [] }));

        let present = Element::new("P").with_child(
            Element::new("Required")
                .with_child(Element::leaf("Name", "n"))
                .with_child(Element::leaf("Role", "r")),
        );
        assert_eq!(
            project(&present, PARENT),
            json!({ "Name": "n", "Roles": ["r"] })
        );
    }

    #[test]
    fn unresolved_description_is_omitted() {
        let e = Element::new("Website").with_child(Element::leaf("WebsiteRole", "99"));
        let out = project(&e, WEBSITE);
        assert!(out.get("WebsiteRole").is_none());
    }

    #[test]
    fn attribute_forms() {
        const ATTRS: Shape = &[
            Rule::Attribute {
                name: "sourcename",
                key: "Raw",
                list: None,
                form: Form::Code,
            },
            Rule::Attribute {
                name: "language",
                key: "Code",
                list: Some(CodeList::Language),
                form: Form::Code,
            },
            Rule::Attribute {
                name: "language",
                key: "Described",
                list: Some(CodeList::Language),
                form: Form::Description,
            },
        ];
        let e = Element::new("X")
            .with_attribute("sourcename", " ")
            .with_attribute("language", "eng");
        let out = project(&e, ATTRS);
        assert_eq!(
            out,
            json!({ "Raw": null, "Code": "eng", "Described": "English" })
        );
    }

    #[test]
    fn symbol_form() {
        const SUBJECT: Shape = &[Rule::Coded {
            tag: "SubjectSchemeIdentifier",
            key: "SubjectSchemeIdentifier",
            list: CodeList::SubjectSchemeIdentifier,
            form: Form::Symbol,
        }];
        let e = Element::new("Subject").with_child(Element::leaf("SubjectSchemeIdentifier", "12"));
        assert_eq!(
            project(&e, SUBJECT),
            json!({ "SubjectSchemeIdentifier": "BIC_subject_category" })
        );
    }

    #[test]
    fn unless_skips_rule_when_marker_present() {
        const DETAIL: Shape = &[
            Rule::Flag {
                tag: "NoContributor",
                key: "Anonymous",
            },
            Rule::Unless {
                marker: "NoContributor",
                rule: &Rule::List {
                    tag: "Contributor",
                    key: "Contributors",
                    shape: &[],
                },
            },
        ];
        let with_marker = Element::new("DescriptiveDetail").with_child(Element::new("NoContributor"));
        assert_eq!(project(&with_marker, DETAIL), json!({ "Anonymous": true }));

        let without = Element::new("DescriptiveDetail").with_child(Element::new("Contributor"));
        assert_eq!(
            project(&without, DETAIL),
            json!({ "Anonymous": false, "Contributors": [{}] })
        );
    }
}
