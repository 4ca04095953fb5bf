//! The 64-symbol nonce alphabet
//!
//! Order matters: the position of a symbol in [`ALPHABET`] is its digit value.

/// Ordered nonce symbols. Index 0 is the "zero" digit.
pub const ALPHABET: &[u8; 64] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/";

/// Radix of the nonce counter
pub const RADIX: usize = ALPHABET.len();

/// Smallest symbol (digit zero)
pub const FIRST: u8 = ALPHABET[0];

/// Largest symbol; incrementing it overflows
pub const LAST: u8 = ALPHABET[RADIX - 1];

/// Marker for bytes outside the alphabet
const INVALID: u8 = u8::MAX;

/// Byte -> rank lookup, `INVALID` for non-members
const RANKS: [u8; 256] = build_ranks();

const fn build_ranks() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < RADIX {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Rank of `symbol` in the alphabet, or `None` if it is not a member.
#[inline]
pub fn rank(symbol: u8) -> Option<usize> {
    match RANKS[symbol as usize] {
        INVALID => None,
        r => Some(r as usize),
    }
}

/// Whether `symbol` belongs to the alphabet.
#[inline]
pub fn contains(symbol: u8) -> bool {
    RANKS[symbol as usize] != INVALID
}

/// The symbol following `symbol`.
///
/// Returns `None` on overflow (`symbol == LAST`) and for non-members.
#[inline]
pub fn successor(symbol: u8) -> Option<u8> {
    let r = rank(symbol)?;
    ALPHABET.get(r + 1).copied()
}
