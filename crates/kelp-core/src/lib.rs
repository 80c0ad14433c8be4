#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Lexer-facing primitives shared by the Kelp compiler crates.
//!
//! The scanner itself lives elsewhere; this crate only carries what the
//! semantic passes consume from it:
//! - **Tokens**: the operator `TokenKind` enumeration
//! - **Names**: the identifier hash used to pre-filter name lookups

pub mod hash;
pub mod token;

#[cfg(test)]
mod hash_tests;

pub use hash::{NameHash, name_hash};
pub use token::TokenKind;
