//! # Algorithms Module
//!
//! Secret hashing and the pure claim/reclaim validation pipelines.

pub mod secret;

pub use secret::{
    generate_random_secret, hash_secret, verify_claim, verify_reclaim, verify_secret,
};
