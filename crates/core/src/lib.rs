//! # lowhash Core Algorithm
//!
//! The building blocks of an unbounded "smallest digest" proof-of-work search:
//! enumerate candidate nonces over a fixed 64-symbol alphabet, hash each one
//! together with an identity, and compare digests.
//!
//! ## Nonce Enumeration
//!
//! A nonce is a base-64 number written most-significant symbol first, where
//! `a` plays the role of zero and `/` is the largest digit:
//!
//! ```text
//! a, b, ..., +, /, aa, ab, ..., //, aaa, ...
//! ```
//!
//! Incrementing carries leftward and grows the nonce by one `a` when every
//! position overflows (`///` -> `aaaa`).
//!
//! ## Input Format
//!
//! ```text
//! message = identity || "/" || nonce
//! digest  = SHA-256(message)
//! ```
//!
//! Digests order by their bytes, which is the same order as their fixed-length
//! lowercase hex rendering.
//!
//! ## Example
//!
//! ```rust
//! use lowhash_core::{Nonce, digest, pretty_print};
//!
//! let mut nonce = Nonce::default();
//! nonce.increment();
//! assert_eq!(nonce.to_string(), "b");
//!
//! let result = digest("lucasmelin", &nonce);
//! println!("{}", pretty_print(&result.to_hex()));
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! lowhash-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
mod digest;
mod format;
mod nonce;

pub use alphabet::{ALPHABET, FIRST, LAST};
pub use digest::{Digest, IdentityHasher, SEPARATOR, digest};
pub use format::{GROUP_SIZE, chunk, pretty_print};
pub use nonce::{Nonce, NonceError, Nonces};
