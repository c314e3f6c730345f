//! # Domain Module
//!
//! Core domain types for the envelope protocol.

pub mod accounts;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod secret_phrase;
pub mod store;
pub mod value_objects;

pub use accounts::AccountLedger;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use secret_phrase::SecretPhrase;
pub use store::{EnvelopeStore, FIRST_ENVELOPE_ID};
pub use value_objects::*;
