//! # Integration Tests
//!
//! Cross-crate lifecycle scenarios.

pub mod lifecycle;
