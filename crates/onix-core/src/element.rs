//! # Element Tree
//!
//! A minimal ordered element tree: the structure the reader produces and
//! the mapper walks. Child order and attribute order are document order.
//!
//! Text-bearing elements may hold markup (e.g. an XHTML `<Text>` block with
//! `<p>` children). [`Element::text`] returns such content re-serialized as
//! inner markup so no information is dropped on the way to the output
//! document.

use crate::presence::Presence;

/// A content node inside an element: a child element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// A run of character data (already unescaped).
    Text(String),
}

/// A parsed XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    content: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Create an element holding a single text run.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Builder: append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.content.push(Node::Element(child));
        self
    }

    /// Builder: append several child elements in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.content
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Builder: append a text run.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(Node::Text(text.into()));
        self
    }

    /// Append an attribute in place.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Append a content node in place.
    pub fn push_node(&mut self, node: Node) {
        self.content.push(node);
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up an attribute. A blank value counts as `Empty`.
    pub fn attribute(&self, name: &str) -> Presence<&str> {
        match self.attributes.iter().find(|(k, _)| k == name) {
            None => Presence::Absent,
            Some((_, v)) if v.trim().is_empty() => Presence::Empty,
            Some((_, v)) => Presence::Value(v.trim()),
        }
    }

    /// Content nodes in document order.
    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.content.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Consume the element, yielding its child elements in document order.
    pub fn into_elements(self) -> impl Iterator<Item = Element> {
        self.content.into_iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// The first child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// Every child element with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |e| e.name == name)
    }

    /// Whether a child element with the given name occurs.
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// The element's own content as a string.
    ///
    /// Plain character content is trimmed. Mixed content is re-serialized
    /// as inner markup. Whitespace-only or missing content is `Empty`.
    pub fn text(&self) -> Presence<String> {
        let has_elements = self.elements().next().is_some();
        let raw = if has_elements {
            let mut out = String::new();
            for node in &self.content {
                write_node(node, &mut out);
            }
            out
        } else {
            self.content
                .iter()
                .filter_map(|n| match n {
                    Node::Text(t) => Some(t.as_str()),
                    Node::Element(_) => None,
                })
                .collect()
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Presence::Empty
        } else {
            Presence::Value(trimmed.to_string())
        }
    }

    /// The content of the first child element with the given name.
    pub fn field(&self, name: &str) -> Presence<String> {
        match self.child(name) {
            Some(child) => child.text(),
            None => Presence::Absent,
        }
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => escape_into(t, false, out),
        Node::Element(e) => {
            out.push('<');
            out.push_str(&e.name);
            for (k, v) in &e.attributes {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                escape_into(v, true, out);
                out.push('"');
            }
            if e.content.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &e.content {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&e.name);
            out.push('>');
        }
    }
}

fn escape_into(s: &str, attribute: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
