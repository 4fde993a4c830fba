//! Hand-built markup forests.
//!
//! Offsets line up with the `source` of each fixture so the reported
//! line/column ranges can be checked.

use markup_outline::syntax::{MarkupDocument, MarkupNode};

pub fn el(tag: &str, start: u32, end: u32) -> MarkupNode {
    MarkupNode::new(tag, start, end)
}

/// A small page with nested, attributed elements.
pub struct PageFixture {
    pub source: &'static str,
    pub document: MarkupDocument,
}

pub fn page() -> PageFixture {
    let source = "<html>\n<body id='main' class=\"layout  dark\">\n<p class=\"a b c\"></p>\n<span></span>\n</body>\n</html>\n<!---->";

    // line 0: <html>            0..6
    // line 1: <body ...>         7..44
    // line 2: <p ...></p>       45..66
    // line 3: <span></span>     67..80
    // line 4: </body>           81..88
    // line 5: </html>           89..96
    // line 6: <!---->           97..104
    let document = MarkupDocument::new(vec![
        el("html", 0, 96).with_child(
            el("body", 7, 88)
                .with_attribute("id", "'main'")
                .with_attribute("class", "\"layout  dark\"")
                .with_children([
                    el("p", 45, 66).with_attribute("class", "\"a b c\""),
                    el("span", 67, 80),
                ]),
        ),
        el("", 97, 104),
    ]);

    PageFixture { source, document }
}

/// A chain of `depth` nested `div`s, all zero-width at offset 0.
pub fn deep_chain(depth: usize) -> MarkupDocument {
    let mut node = el("div", 0, 0);
    for _ in 1..depth {
        node = el("div", 0, 0).with_child(node);
    }
    MarkupDocument::new(vec![node])
}

/// A forest of `width` roots, each with `width` leaf children.
pub fn wide_forest(width: usize) -> MarkupDocument {
    let roots = (0..width)
        .map(|i| {
            el("section", 0, 0)
                .with_attribute("id", format!("s{i}"))
                .with_children((0..width).map(|j| {
                    el("div", 0, 0).with_attribute("class", format!("c{j}"))
                }))
        })
        .collect();
    MarkupDocument::new(roots)
}
