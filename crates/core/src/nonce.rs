//! Variable-length base-64 nonce counter

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::alphabet::{self, FIRST};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NonceError {
    #[error("Nonce must not be empty")]
    Empty,

    #[error("Invalid nonce symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// A candidate nonce
///
/// Stored as raw alphabet bytes, most significant symbol first. Never empty,
/// and every byte is a member of [`ALPHABET`](crate::ALPHABET).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nonce(Vec<u8>);

impl Nonce {
    /// Parse and validate a nonce string.
    pub fn parse(s: &str) -> Result<Self, NonceError> {
        if s.is_empty() {
            return Err(NonceError::Empty);
        }
        if let Some((position, symbol)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| !c.is_ascii() || !alphabet::contains(c as u8))
        {
            return Err(NonceError::InvalidSymbol { symbol, position });
        }
        Ok(Self(s.as_bytes().to_vec()))
    }

    /// Advance to the next nonce in enumeration order.
    ///
    /// Scans from the least significant symbol. The first symbol that is not
    /// the last of the alphabet is bumped to its successor; every overflowing
    /// symbol passed on the way resets to `a`. If all symbols overflow, an `a`
    /// is prepended, so `///` becomes `aaaa`.
    pub fn increment(&mut self) {
        for symbol in self.0.iter_mut().rev() {
            match alphabet::successor(*symbol) {
                Some(next) => {
                    *symbol = next;
                    return;
                }
                None => *symbol = FIRST,
            }
        }
        self.0.insert(0, FIRST);
    }

    /// The nonce following this one, leaving `self` untouched.
    pub fn successor(&self) -> Self {
        let mut next = self.clone();
        next.increment();
        next
    }

    /// Lazily enumerate every nonce after this one.
    pub fn iter_after(&self) -> Nonces {
        Nonces {
            current: self.clone(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Alphabet bytes are ASCII, so this never fails.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a parsed or default nonce.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn ranks(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&b| alphabet::rank(b).unwrap_or(0))
    }
}

impl Default for Nonce {
    fn default() -> Self {
        Self(vec![FIRST])
    }
}

impl Ord for Nonce {
    /// Shortlex by alphabet rank: shorter nonces first, then digit by digit.
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.ranks().cmp(other.ranks()))
    }
}

impl PartialOrd for Nonce {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Nonce {
    type Err = NonceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Nonce {
    type Error = NonceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({:?})", self.as_str())
    }
}

/// Unbounded iterator over successive nonces
#[derive(Debug, Clone)]
pub struct Nonces {
    current: Nonce,
}

impl Iterator for Nonces {
    type Item = Nonce;

    fn next(&mut self) -> Option<Nonce> {
        self.current.increment();
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl core::iter::FusedIterator for Nonces {}
