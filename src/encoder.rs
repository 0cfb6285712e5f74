// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Encoder combining a support set with its current dictionary.
//!
//! ```text
//! XorEncoder {
//!     support: SupportSet,          // immutable alphabet
//!     mode: DictionaryMode,         // how the dictionary was built
//!     dictionary: Arc<Dictionary>,  // immutable, shared
//! }
//! ```
//!
//! Nothing here mutates after construction. Switching mode builds a fresh
//! dictionary and returns a new encoder; existing encoders, and anyone
//! holding their `Arc<Dictionary>`, keep seeing the old one.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::compiler::{Expression, ExpressionCompiler};
use crate::dictionary::{
    fixed_length_dictionary, shortest_path_dictionary, Dictionary, LengthRecommender,
    MIN_FIXED_LEN,
};
use crate::errors::EncodeError;
use crate::support::SupportSet;

/// How an encoder's dictionary is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryMode {
    /// Shortest codewords; compiles only bytes of the longest length.
    ShortestPath,
    /// Every codeword exactly this long.
    FixedLength(usize),
    /// Fixed length from [`LengthRecommender::recommend_complete`], falling
    /// back to [`LengthRecommender::recommend`] when no length is complete.
    Recommended,
    /// Fixed length from [`LengthRecommender::recommend_for_text`].
    ForText,
}

impl fmt::Display for DictionaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryMode::ShortestPath => write!(f, "shortest-path"),
            DictionaryMode::FixedLength(n) => write!(f, "fixed-length({})", n),
            DictionaryMode::Recommended => write!(f, "recommended"),
            DictionaryMode::ForText => write!(f, "for-text"),
        }
    }
}

/// A support set together with the dictionary used to encode against it.
#[derive(Debug, Clone)]
pub struct XorEncoder {
    support: SupportSet,
    mode: DictionaryMode,
    dictionary: Arc<Dictionary>,
}

impl XorEncoder {
    /// Build an encoder in `mode`.
    ///
    /// [`DictionaryMode::ForText`] needs the text; use
    /// [`XorEncoder::for_text`] for it. Passed here it builds, and reports,
    /// a `Recommended` encoder.
    ///
    /// A shortest-path dictionary narrower than two bytes (empty support, or
    /// one reaching nothing beyond single bytes) is an `InvalidLength`.
    pub fn new(support: SupportSet, mode: DictionaryMode) -> Result<Self, EncodeError> {
        let (mode, dictionary) = match mode {
            DictionaryMode::ShortestPath => {
                let dictionary = shortest_path_dictionary(&support);
                if dictionary.width() < MIN_FIXED_LEN {
                    return Err(EncodeError::InvalidLength {
                        len: dictionary.width(),
                        min: MIN_FIXED_LEN,
                    });
                }
                (mode, dictionary)
            }
            DictionaryMode::FixedLength(n) => (mode, fixed_length_dictionary(&support, n)?),
            DictionaryMode::Recommended | DictionaryMode::ForText => {
                let n = recommended_len(&support);
                (DictionaryMode::Recommended, fixed_length_dictionary(&support, n)?)
            }
        };
        info!(%mode, reachable = dictionary.len(), width = dictionary.width(), "encoder ready");
        Ok(Self {
            support,
            mode,
            dictionary: Arc::new(dictionary),
        })
    }

    /// Encoder with a fixed length of `n`.
    pub fn with_fixed_len(support: SupportSet, n: usize) -> Result<Self, EncodeError> {
        Self::new(support, DictionaryMode::FixedLength(n))
    }

    /// Encoder whose fixed length is the smallest one that encodes `text`.
    ///
    /// Fails if some character of `text` cannot be encoded at any length, or
    /// if no single length encodes all of them.
    pub fn for_text(support: SupportSet, text: &str) -> Result<Self, EncodeError> {
        let n = LengthRecommender::new(&support).recommend_for_text(text)?;
        let dictionary = fixed_length_dictionary(&support, n)?;
        info!(n, chars = text.chars().count(), "encoder sized for text");
        Ok(Self {
            support,
            mode: DictionaryMode::ForText,
            dictionary: Arc::new(dictionary),
        })
    }

    /// A new encoder over the same support set, with a freshly built
    /// dictionary for `mode`.
    pub fn with_mode(&self, mode: DictionaryMode) -> Result<Self, EncodeError> {
        Self::new(self.support.clone(), mode)
    }

    pub fn support(&self) -> &SupportSet {
        &self.support
    }

    pub fn mode(&self) -> DictionaryMode {
        self.mode
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Codeword length every compiled character uses.
    pub fn width(&self) -> usize {
        self.dictionary.width()
    }

    /// Compile `text` against the current dictionary.
    pub fn encode(&self, text: &str) -> Result<Expression, EncodeError> {
        ExpressionCompiler::new(&self.dictionary).compile(text)
    }
}

fn recommended_len(support: &SupportSet) -> usize {
    let recommender = LengthRecommender::new(support);
    recommender.recommend_complete().unwrap_or_else(|| {
        let n = recommender.recommend();
        warn!(
            n,
            "no single fixed length covers every reachable byte; using longest shortest path"
        );
        n
    })
}
