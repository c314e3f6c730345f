//! # Secret Phrase Type
//!
//! Wrapper for plaintext envelope secrets that zeroizes memory on drop.
//!
//! ## Security
//!
//! Secret phrases are the pre-images of envelope commitments and must
//! not linger in memory after use. This wrapper ensures the bytes are
//! zeroed when dropped, preventing:
//!
//! - Memory dumps from revealing secrets
//! - Cold boot attacks
//! - Core dump exposure

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A plaintext secret phrase that zeroizes on drop.
///
/// # Security
///
/// This type implements `Zeroize` and `ZeroizeOnDrop` to ensure the
/// secret bytes are zeroed when the value is dropped. Secrets may be
/// any byte string; the protocol hashes them without interpretation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretPhrase {
    inner: Vec<u8>,
}

impl SecretPhrase {
    /// Create a new secret phrase from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { inner: bytes }
    }

    /// Create from a UTF-8 phrase.
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            inner: phrase.as_bytes().to_vec(),
        }
    }

    /// Get the secret bytes (use carefully!).
    ///
    /// # Security
    ///
    /// Avoid keeping references to the returned slice.
    /// Use immediately and let go.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl std::fmt::Debug for SecretPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("SecretPhrase(***)")
    }
}

// Serialization that doesn't expose raw bytes in logs
impl Serialize for SecretPhrase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(&self.inner))
    }
}

impl<'de> Deserialize<'de> for SecretPhrase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        Ok(Self::new(bytes))
    }
}
