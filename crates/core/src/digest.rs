//! SHA-256 digest of `identity || "/" || nonce`

use alloc::string::String;
use core::fmt;

use sha2::{Digest as _, Sha256};

use crate::format::pretty_print;
use crate::nonce::Nonce;

/// Byte placed between identity and nonce
pub const SEPARATOR: u8 = b'/';

/// SHA-256 output size
pub const DIGEST_SIZE: usize = 32;

/// A 256-bit digest
///
/// Ordering is bytewise, which matches lexicographic order of the
/// 64-character lowercase hex rendering.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Lowercase hex, always 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex split into space-separated groups of eight
    pub fn pretty(&self) -> String {
        pretty_print(&self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Hash `identity || "/" || nonce` with SHA-256.
pub fn digest(identity: &str, nonce: &Nonce) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(identity.as_bytes());
    hasher.update([SEPARATOR]);
    hasher.update(nonce.as_bytes());
    Digest(hasher.finalize().into())
}

/// Reusable hasher for a fixed identity
///
/// The `identity || "/"` prefix is absorbed once; every candidate starts
/// from a copy of that state. Produces the same output as [`digest`].
#[derive(Clone)]
pub struct IdentityHasher {
    identity: String,
    prefix: Sha256,
}

impl IdentityHasher {
    pub fn new(identity: &str) -> Self {
        let mut prefix = Sha256::new();
        prefix.update(identity.as_bytes());
        prefix.update([SEPARATOR]);
        Self {
            identity: identity.into(),
            prefix,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Digest of this identity with `nonce`
    pub fn hash(&self, nonce: &Nonce) -> Digest {
        let mut hasher = self.prefix.clone();
        hasher.update(nonce.as_bytes());
        Digest(hasher.finalize().into())
    }
}

impl fmt::Debug for IdentityHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityHasher")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
