//! Human-readable digest rendering

use alloc::string::String;
use alloc::vec::Vec;

/// Characters per group in [`pretty_print`]
pub const GROUP_SIZE: usize = 8;

/// Split `s` into consecutive groups of `size` characters.
///
/// The last group holds the remainder and may be shorter. Empty input yields
/// no groups. A `size` of zero or at least the length of `s` yields `s` as a
/// single group.
pub fn chunk(s: &str, size: usize) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    if size == 0 {
        return alloc::vec![s];
    }

    let mut chunks = Vec::with_capacity(s.len().div_ceil(size));
    let mut start = 0;
    for (count, (i, _)) in s.char_indices().enumerate() {
        if count > 0 && count % size == 0 {
            chunks.push(&s[start..i]);
            start = i;
        }
    }
    chunks.push(&s[start..]);
    chunks
}

/// Group a hex digest into blocks of eight separated by single spaces.
pub fn pretty_print(s: &str) -> String {
    chunk(s, GROUP_SIZE).join(" ")
}
