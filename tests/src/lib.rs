//! # Hash-Locked Envelopes Test Suite
//!
//! Unified test crate containing cross-crate integration scenarios:
//! the full client → signer → gateway → service stack driven through
//! complete envelope lifecycles on a manually advanced clock.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end lifecycle scenarios
//!     └── lifecycle.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p envelope-tests
//!
//! # By category
//! cargo test -p envelope-tests integration::
//! ```

pub mod integration;
