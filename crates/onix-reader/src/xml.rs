//! # XML Reader
//!
//! Builds an [`Element`] tree with quick-xml's pull parser, then splits the
//! message root into a [`Source`].
//!
//! Text is kept untrimmed at this stage so that mixed XHTML content keeps
//! its inner spacing; trimming happens when the mapper reads a value.
//! Namespace prefixes are dropped from element and attribute names.

use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use onix_core::{Element, MessageVersion, Node, Product, ProductVariant, Source};

use crate::error::{ReadError, ReadResult};

/// Root element of a reference-tag ONIX message.
pub const MESSAGE_ROOT: &str = "ONIXMessage";

/// Root element of a short-tag ONIX message.
pub const SHORT_TAG_ROOT: &str = "ONIXmessage";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read a message held in memory. `name` labels the source in errors and
/// logs.
pub fn read_str(xml: &str, name: &str) -> ReadResult<Source> {
    let path = PathBuf::from(name);
    let root = parse_tree(xml).map_err(|e| e.at(&path))?;
    let root = root.ok_or_else(|| ReadError::NoRoot { path: path.clone() })?;
    into_source(root, name, &path)
}

/// Read a message file from disk.
pub fn read_file(path: &Path) -> ReadResult<Source> {
    let xml = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let root = parse_tree(&xml).map_err(|e| e.at(path))?;
    let root = root.ok_or_else(|| ReadError::NoRoot {
        path: path.to_path_buf(),
    })?;
    let source = into_source(root, &name, path)?;
    tracing::debug!(
        file = %path.display(),
        version = %source.version,
        records = source.len(),
        "read message"
    );
    Ok(source)
}

// ---------------------------------------------------------------------------
// Message splitting
// ---------------------------------------------------------------------------

fn into_source(root: Element, name: &str, path: &Path) -> ReadResult<Source> {
    match root.name() {
        MESSAGE_ROOT => {}
        SHORT_TAG_ROOT => {
            return Err(ReadError::ShortTags {
                path: path.to_path_buf(),
            })
        }
        other => {
            return Err(ReadError::NotOnix {
                path: path.to_path_buf(),
                root: other.to_string(),
            })
        }
    }

    let version = MessageVersion::from_release(root.attribute("release").value());
    let onix3 = version.is_supported();
    let records = root
        .into_elements()
        .filter(|e| e.name() == Product::TAG)
        .map(|e| {
            if onix3 {
                ProductVariant::Onix3(Product::new(e))
            } else {
                ProductVariant::Legacy(e)
            }
        })
        .collect();

    Ok(Source {
        name: name.to_string(),
        version,
        records,
    })
}

// ---------------------------------------------------------------------------
// Tree building
// ---------------------------------------------------------------------------

enum TreeError {
    Xml(quick_xml::Error),
    Truncated(String),
}

impl TreeError {
    fn at(self, path: &Path) -> ReadError {
        match self {
            Self::Xml(source) => ReadError::Xml {
                path: path.to_path_buf(),
                source,
            },
            Self::Truncated(open) => ReadError::Truncated {
                path: path.to_path_buf(),
                open,
            },
        }
    }
}

impl From<quick_xml::Error> for TreeError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}

fn parse_tree(xml: &str) -> Result<Option<Element>, TreeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    let value = text.unescape_with(resolve_entity)?;
                    parent.push_node(Node::Text(value.into_owned()));
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_node(Node::Text(String::from_utf8_lossy(&data).into_owned()));
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(TreeError::Truncated(open.name().to_string()));
    }
    Ok(root)
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, TreeError> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.push_attribute(key, value);
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.push_node(Node::Element(element)),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

/// Predefined XML entities plus the HTML entities that commonly leak into
/// XHTML text blocks.
fn resolve_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        "nbsp" => Some("\u{a0}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        "hellip" => Some("\u{2026}"),
        "copy" => Some("\u{a9}"),
        "reg" => Some("\u{ae}"),
        "trade" => Some("\u{2122}"),
        _ => None,
    }
}
