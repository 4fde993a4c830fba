//! Hierarchical document outline.
//!
//! Same names and ranges as [`document_symbols`](super::document_symbols), but
//! nested the way the elements are nested instead of flattened with container
//! names.

use crate::base::{RangeConverter, Span};
use crate::syntax::MarkupNode;

use super::SymbolKind;
use super::naming::node_symbol_name;

/// One node of the nested outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DocumentSymbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Full extent of the element.
    pub range: Span,
    /// Range to reveal when the entry is picked. Elements have no separate
    /// name token, so this equals `range`.
    pub selection_range: Span,
    pub children: Vec<DocumentSymbol>,
}

impl DocumentSymbol {
    /// Number of entries in this subtree, including `self`.
    pub fn symbol_count(&self) -> usize {
        1 + self.children.iter().map(DocumentSymbol::symbol_count).sum::<usize>()
    }
}

/// Build the nested outline of `roots`, one entry per element.
pub fn document_symbol_tree(
    roots: &[MarkupNode],
    converter: &impl RangeConverter,
) -> Vec<DocumentSymbol> {
    let tree: Vec<_> = roots.iter().map(|root| to_symbol(root, converter)).collect();

    tracing::debug!(
        roots = roots.len(),
        symbols = tree.iter().map(DocumentSymbol::symbol_count).sum::<usize>(),
        "built document symbol tree"
    );

    tree
}

fn to_symbol(node: &MarkupNode, converter: &impl RangeConverter) -> DocumentSymbol {
    let range = converter.span(node.start, node.end);
    DocumentSymbol {
        name: node_symbol_name(node),
        kind: SymbolKind::Field,
        range,
        selection_range: range,
        children: node
            .children
            .iter()
            .map(|child| to_symbol(child, converter))
            .collect(),
    }
}
