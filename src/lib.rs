// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rewrite strings as XOR-joined quoted literals over a restricted alphabet.
//!
//! Given a support set of allowed byte values, every target byte is
//! expressed as an ordered sequence of support bytes whose XOR is that byte.
//! Aligning those sequences column by column turns a string into `n`
//! literals, each using only allowed characters, whose position-wise XOR is
//! the original string:
//!
//! ```
//! use xor_literal::{SupportSet, XorEncoder};
//!
//! let encoder = XorEncoder::with_fixed_len(SupportSet::default(), 3).unwrap();
//! let expr = encoder.encode("ls").unwrap();
//!
//! assert_eq!(expr.to_string(), "'&&'^'6+'^'|~'");
//! assert_eq!(expr.decode(), "ls");
//! ```
//!
//! # Architecture
//!
//! The 256 byte values are the nodes of a graph with an edge `x -> x ^ c`
//! for each support byte `c`. Everything is a search over that fixed,
//! 256-node state space.
//!
//! ## Alphabet
//!
//! - [`SupportSet`]: validated, deduplicated, sorted once at construction
//! - [`support::ByteSet`]: 256-bit set used for layers and coverage checks
//!
//! ## Dictionaries (immutable once built)
//!
//! - [`shortest_path_dictionary`]: BFS, minimal codeword per byte
//! - [`fixed_length_dictionary`]: layered reachability, every codeword
//!   exactly `n` long
//! - [`LengthRecommender`]: picks `n`, optionally verifying coverage
//!
//! ## Compilation
//!
//! - [`ExpressionCompiler`]: checks every character first, then transposes
//!   codewords into literal columns
//! - [`Expression`]: columns with rendering, parsing, and evaluation
//!
//! ## Encoder
//!
//! [`XorEncoder`] pairs a support set with an `Arc<Dictionary>`; changing
//! mode yields a new encoder rather than mutating the old one.
//!
//! # Determinism
//!
//! Both searches expand support bytes in ascending order and keep the first
//! path found for each byte, so a given alphabet and length always produce
//! the same dictionary.

pub mod compiler;
pub mod config;
pub mod dictionary;
pub mod encoder;
pub mod errors;
pub mod logging;
pub mod support;

// Re-export commonly used types
pub use compiler::{EncodedString, Expression, ExpressionCompiler, Quote};
pub use dictionary::{
    fixed_length_dictionary, shortest_path_dictionary, Codeword, Dictionary, DictionaryKind,
    LengthRecommender,
};
pub use encoder::{DictionaryMode, XorEncoder};
pub use errors::{ConfigError, EncodeError};
pub use support::SupportSet;
