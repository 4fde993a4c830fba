//! Structural checks on extracted outlines.

use markup_outline::ide::{SymbolInfo, node_symbol_name};
use markup_outline::syntax::{MarkupDocument, MarkupNode};

/// Expected `(name, container_name)` pairs, computed independently with a
/// recursive walk of the forest.
pub fn expected_rows(document: &MarkupDocument) -> Vec<(String, String)> {
    fn walk(node: &MarkupNode, container: &str, out: &mut Vec<(String, String)>) {
        let name = node_symbol_name(node);
        out.push((name.clone(), container.to_string()));
        for child in &node.children {
            walk(child, &name, out);
        }
    }

    let mut out = Vec::new();
    for root in document.roots() {
        walk(root, "", &mut out);
    }
    out
}

/// Assert the outline is the pre-order walk of `document` with correct containers.
pub fn assert_outline_matches(document: &MarkupDocument, symbols: &[SymbolInfo]) {
    let actual: Vec<(String, String)> = symbols
        .iter()
        .map(|s| (s.name.to_string(), s.container_name.to_string()))
        .collect();
    let expected = expected_rows(document);

    assert_eq!(
        actual.len(),
        document.node_count(),
        "Expected one symbol per node"
    );
    assert_eq!(actual, expected, "Outline differs from pre-order walk");
}
