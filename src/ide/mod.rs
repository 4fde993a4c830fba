//! Outline features — High-level APIs for editor outline and breadcrumb views.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Borrow the parsed forest, return owned results
//! 2. **No LSP types**: Uses our own types, serialized at the host boundary
//! 3. **One naming rule**: Flat and nested outlines share [`symbol_name`]
//!
//! ## Usage
//!
//! ```
//! use markup_outline::base::LineIndex;
//! use markup_outline::ide::document_symbols;
//! use markup_outline::syntax::MarkupNode;
//!
//! let source = "<div id=\"app\"><p></p></div>";
//! let roots = vec![
//!     MarkupNode::new("div", 0u32, 27u32)
//!         .with_attribute("id", "\"app\"")
//!         .with_child(MarkupNode::new("p", 14u32, 21u32)),
//! ];
//!
//! let symbols = document_symbols("file:///index.html", &roots, &LineIndex::new(source));
//! assert_eq!(&*symbols[1].name, "p");
//! assert_eq!(&*symbols[1].container_name, "div#app");
//! ```

mod naming;
mod outline;
mod symbols;

pub use naming::{node_symbol_name, symbol_name};
pub use outline::{DocumentSymbol, document_symbol_tree};
pub use symbols::{Location, SymbolInfo, SymbolKind, document_symbols};
