//! Nested outline tests.

use crate::helpers::fixtures::*;
use markup_outline::base::{LineIndex, Span};
use markup_outline::ide::{DocumentSymbol, document_symbol_tree, document_symbols};

fn flatten<'a>(symbols: &'a [DocumentSymbol], out: &mut Vec<&'a str>) {
    for symbol in symbols {
        out.push(&symbol.name);
        flatten(&symbol.children, out);
    }
}

#[test]
fn test_tree_names_match_flat_list() {
    let page = page();
    let index = LineIndex::new(page.source);

    let tree = document_symbol_tree(page.document.roots(), &index);
    let flat = document_symbols("doc", page.document.roots(), &index);

    let mut tree_names = Vec::new();
    flatten(&tree, &mut tree_names);
    let flat_names: Vec<&str> = flat.iter().map(|s| s.name.as_ref()).collect();

    assert_eq!(tree_names, flat_names);
}

#[test]
fn test_tree_nesting_and_ranges() {
    let page = page();
    let tree = document_symbol_tree(page.document.roots(), &LineIndex::new(page.source));

    assert_eq!(tree.len(), 2);
    let body = &tree[0].children[0];
    assert_eq!(body.name, "body#main.layout.dark");
    assert_eq!(body.range, Span::from_coords(1, 0, 4, 7));
    assert_eq!(body.selection_range, body.range);
    assert_eq!(body.children.len(), 2);
    assert_eq!(tree[0].symbol_count(), 4);
    assert_eq!(tree[1].name, "");
}
