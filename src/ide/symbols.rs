//! Flat symbol listing for the document outline.

use std::sync::Arc;

use crate::base::{RangeConverter, Span};
use crate::syntax::MarkupNode;

use super::naming::node_symbol_name;

/// Classification attached to every outline entry.
///
/// Markup elements are not distinguished from one another, so there is a
/// single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Field,
}

impl SymbolKind {
    /// Numeric `SymbolKind` value used by the Language Server Protocol.
    pub fn lsp_code(self) -> u8 {
        match self {
            SymbolKind::Field => 8,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SymbolKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.lsp_code())
    }
}

/// A source range within a named document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    pub uri: Arc<str>,
    pub range: Span,
}

/// One entry of the flat document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SymbolInfo {
    /// Display name, see [`symbol_name`](super::symbol_name).
    pub name: Arc<str>,
    pub kind: SymbolKind,
    pub location: Location,
    /// Name of the enclosing element, empty for top-level elements.
    pub container_name: Arc<str>,
}

/// Get one symbol per element of `roots`, in document order.
///
/// A parent is always listed before its descendants and siblings keep their
/// source order. Each symbol's `container_name` is the name of its direct
/// parent and shares that parent's allocation.
///
/// # Arguments
/// * `uri` - Document identifier stamped into every location
/// * `roots` - Top-level elements of the parsed document
/// * `converter` - Turns node offsets into line/column spans
pub fn document_symbols(
    uri: &str,
    roots: &[MarkupNode],
    converter: &impl RangeConverter,
) -> Vec<SymbolInfo> {
    let uri: Arc<str> = Arc::from(uri);
    let top_level: Arc<str> = Arc::from("");

    let mut symbols = Vec::new();
    let mut stack: Vec<(&MarkupNode, Arc<str>)> = roots
        .iter()
        .rev()
        .map(|root| (root, top_level.clone()))
        .collect();

    while let Some((node, container_name)) = stack.pop() {
        let name: Arc<str> = Arc::from(node_symbol_name(node));

        symbols.push(SymbolInfo {
            name: name.clone(),
            kind: SymbolKind::Field,
            location: Location {
                uri: uri.clone(),
                range: converter.span(node.start, node.end),
            },
            container_name,
        });

        stack.extend(node.children.iter().rev().map(|child| (child, name.clone())));
    }

    tracing::debug!(
        uri = %uri,
        roots = roots.len(),
        symbols = symbols.len(),
        "extracted document symbols"
    );

    symbols
}
