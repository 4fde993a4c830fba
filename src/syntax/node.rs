//! Parsed markup elements.
//!
//! The outline never parses text itself. Hosts adapt their parser's output
//! into these types (the builder methods exist for that) and hand the forest
//! over by shared reference.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use text_size::TextSize;

/// Attribute map of a single element.
///
/// A `None` value is a valueless attribute such as `<input disabled>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    map: FxHashMap<SmolStr, Option<String>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, returning the previous entry if any.
    pub fn insert(
        &mut self,
        name: impl Into<SmolStr>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        self.map.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Raw value of `name`; `None` for missing and valueless attributes alike.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K: Into<SmolStr>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

/// One element of a parsed markup document.
///
/// `start..end` is the element's source span as reported by the parser. The
/// offsets are kept as two separate values rather than a `TextRange` because
/// nothing here guarantees `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    pub tag: SmolStr,
    pub attributes: Attributes,
    pub start: TextSize,
    pub end: TextSize,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn new(
        tag: impl Into<SmolStr>,
        start: impl Into<TextSize>,
        end: impl Into<TextSize>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            start: start.into(),
            end: end.into(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, Some(value.into()));
        self
    }

    pub fn with_valueless_attribute(mut self, name: impl Into<SmolStr>) -> Self {
        self.attributes.insert(name, None);
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// This node followed by all of its descendants, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a node forest.
pub struct Descendants<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// The forest of top-level elements of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupDocument {
    pub roots: Vec<MarkupNode>,
}

impl MarkupDocument {
    pub fn new(roots: Vec<MarkupNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[MarkupNode] {
        &self.roots
    }

    /// Every node of the document in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.roots.iter().rev().collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}
