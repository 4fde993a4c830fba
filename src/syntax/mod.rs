//! Input model: the parsed markup forest the outline is computed from.

mod node;

pub use node::{Attributes, Descendants, MarkupDocument, MarkupNode};
