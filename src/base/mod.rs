//! Foundation types for outline extraction.
//!
//! - [`TextSize`] - Source offsets as produced by the parser
//! - [`Position`], [`Span`] - Line/column locations reported to clients
//! - [`LineIndex`] - Offset to line/column conversion
//! - [`RangeConverter`] - The conversion boundary the extractor calls into
//!
//! This module has NO dependencies on other outline modules.

mod line_index;
mod position;

pub use line_index::{LineIndex, OffsetError, PositionEncoding, RangeConverter};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::TextSize;
