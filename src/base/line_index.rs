//! Offset to line/column conversion.

use std::sync::Arc;

use text_size::TextSize;
use thiserror::Error;

use super::{Position, Span};

/// Unit used to count columns within a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PositionEncoding {
    /// Raw byte columns.
    Utf8,
    /// UTF-16 code units, the LSP default.
    #[default]
    Utf16,
}

/// Failure of a strict offset conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error("offset {offset:?} is past the end of the text (length {len:?})")]
    OutOfBounds { offset: TextSize, len: TextSize },
    #[error("offset {offset:?} falls inside a multi-byte character")]
    NotCharBoundary { offset: TextSize },
}

/// Converts node offsets into a line/column [`Span`].
///
/// Offsets are handed over exactly as the parser produced them; whether a
/// malformed pair is clamped, inverted, or rejected is up to the implementor.
pub trait RangeConverter {
    fn span(&self, start: TextSize, end: TextSize) -> Span;
}

/// Line start table for a source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    text: Arc<str>,
    /// Offset of the first byte of every line; always starts with 0.
    line_starts: Vec<TextSize>,
    encoding: PositionEncoding,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![TextSize::from(0)];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 1;
                    line_starts.push(to_size(i + 1));
                }
                b'\r' | b'\n' => line_starts.push(to_size(i + 1)),
                _ => {}
            }
            i += 1;
        }

        Self {
            text: Arc::from(text),
            line_starts,
            encoding: PositionEncoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: PositionEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    pub fn len(&self) -> TextSize {
        to_size(self.text.len())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset`, clamped into the text.
    ///
    /// Offsets past the end map to the end of the text; offsets inside a
    /// multi-byte character map to that character's start.
    pub fn position(&self, offset: TextSize) -> Position {
        let mut clamped = usize::from(offset).min(self.text.len());
        while !self.text.is_char_boundary(clamped) {
            clamped -= 1;
        }
        self.position_unchecked(clamped)
    }

    /// Position of `offset`, rejecting offsets that do not address a character
    /// boundary inside the text.
    pub fn try_position(&self, offset: TextSize) -> Result<Position, OffsetError> {
        let raw = usize::from(offset);
        if raw > self.text.len() {
            return Err(OffsetError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }
        if !self.text.is_char_boundary(raw) {
            return Err(OffsetError::NotCharBoundary { offset });
        }
        Ok(self.position_unchecked(raw))
    }

    fn position_unchecked(&self, offset: usize) -> Position {
        let target = to_size(offset);
        let line = self
            .line_starts
            .partition_point(|&start| start <= target)
            .saturating_sub(1);
        let line_start = usize::from(self.line_starts[line]);

        let column = match self.encoding {
            PositionEncoding::Utf8 => offset - line_start,
            PositionEncoding::Utf16 => self.text[line_start..offset]
                .chars()
                .map(char::len_utf16)
                .sum(),
        };

        Position::new(line as u32, column as u32)
    }
}

impl RangeConverter for LineIndex {
    fn span(&self, start: TextSize, end: TextSize) -> Span {
        Span::new(self.position(start), self.position(end))
    }
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}
