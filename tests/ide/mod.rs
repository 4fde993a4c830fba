//! Outline feature tests
//!
//! Tests for:
//! - Flat document symbols (order, containers, locations)
//! - Nested document symbol tree
//! - Serialized output shape (`serde` feature)

pub mod tests_outline;
