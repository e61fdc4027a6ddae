//! Digest module: canonical JSON bytes and domain-separated content hashes.
//!
//! Used to fingerprint solutions so two runs can be compared byte-for-byte.
//! Depends on nothing else in the kernel.

pub mod canon;
pub mod hash;
