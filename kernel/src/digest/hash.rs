//! Content hashes with domain separation.
//!
//! Algorithm: SHA-256. Every digest is computed over
//! `domain_prefix || data`, where each prefix is null-terminated so no
//! prefix is a prefix of another.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: exactly one `:` separator with non-empty substrings on both
/// sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// Domain prefix for solution digests (initial stack, strategy, steps).
pub const DOMAIN_SOLUTION: &[u8] = b"PANCAKE::SOLUTION::V1\0";

/// Domain prefix for single-stack fingerprints.
pub const DOMAIN_STACK: &[u8] = b"PANCAKE::STACK::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    let hex = hex::encode(digest);
    let full = format!("sha256:{hex}");
    ContentHash {
        colon: "sha256".len(),
        full,
    }
}

/// Fingerprint of a stack's sizes (little-endian `i64` per pancake).
#[must_use]
pub fn stack_fingerprint(sizes: &[i64]) -> ContentHash {
    let mut data = Vec::with_capacity(sizes.len() * 8);
    for size in sizes {
        data.extend_from_slice(&size.to_le_bytes());
    }
    canonical_hash(DOMAIN_STACK, &data)
}
