//! # markup-outline
//!
//! Document outline extraction for parsed markup (HTML-like) documents.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Outline features (flat symbol list, nested symbol tree)
//!   ↓
//! syntax    → Parsed element forest (MarkupNode, Attributes)
//!   ↓
//! base      → Primitives (TextSize, Position/Span, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → ide)
// ============================================================================

/// Foundation types: offsets, positions, line index
pub mod base;

/// Syntax: the parsed element forest the outline is computed from
pub mod syntax;

/// IDE features: document symbols and outline tree
pub mod ide;

// Re-export foundation types
pub use base::{
    LineIndex, OffsetError, Position, PositionEncoding, RangeConverter, Span, TextSize,
};
pub use ide::{DocumentSymbol, Location, SymbolInfo, SymbolKind, document_symbols};
pub use syntax::{Attributes, MarkupDocument, MarkupNode};
