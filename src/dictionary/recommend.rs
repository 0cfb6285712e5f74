// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choosing a fixed codeword length.
//!
//! The default policy takes the longest shortest-path codeword. Any byte
//! with a shorter codeword of the same parity can be padded up to that length
//! with a cancelling pair `c, c`, but bytes of the other parity may be lost,
//! so the policy is a heuristic. [`LengthRecommender::recommend_complete`] and
//! [`LengthRecommender::recommend_for_text`] verify coverage and keep
//! increasing `n` until it holds, or until it provably never will.

use tracing::debug;

use super::fixed::MIN_FIXED_LEN;
use super::shortest::shortest_path_dictionary;
use super::Dictionary;
use crate::errors::EncodeError;
use crate::support::{ByteSet, SupportSet};

/// Recommends fixed lengths from a shortest-path search.
#[derive(Debug, Clone)]
pub struct LengthRecommender<'a> {
    support: &'a SupportSet,
    shortest: Dictionary,
}

impl<'a> LengthRecommender<'a> {
    /// Run the shortest-path search for `support`.
    pub fn new(support: &'a SupportSet) -> Self {
        Self {
            support,
            shortest: shortest_path_dictionary(support),
        }
    }

    /// The shortest-path dictionary the recommendations derive from.
    pub fn shortest(&self) -> &Dictionary {
        &self.shortest
    }

    /// Longest shortest-path codeword, raised to the minimum fixed length.
    ///
    /// # Examples
    ///
    /// ```
    /// use xor_literal::{LengthRecommender, SupportSet};
    ///
    /// let support = SupportSet::default();
    /// assert_eq!(LengthRecommender::new(&support).recommend(), 3);
    /// ```
    pub fn recommend(&self) -> usize {
        self.shortest.max_len().max(MIN_FIXED_LEN)
    }

    /// Smallest `n >= recommend()` whose fixed-length dictionary covers every
    /// byte the shortest-path dictionary reaches.
    ///
    /// `None` if no single length does, e.g. the support set `{1}` reaches 0
    /// only at even lengths and 1 only at odd ones.
    pub fn recommend_complete(&self) -> Option<usize> {
        let targets = self.shortest.reachable();
        let n = smallest_covering_len(self.support, self.recommend(), &targets);
        debug!(?n, reachable = targets.len(), "complete length recommendation");
        n
    }

    /// Smallest length encoding every character of `text`, starting from the
    /// longest shortest-path codeword among those characters.
    ///
    /// Fails with `UnsupportedCharacter` for a character that is unreachable
    /// at any length, and `NoUniformLength` when the characters need lengths
    /// of different parity.
    pub fn recommend_for_text(&self, text: &str) -> Result<usize, EncodeError> {
        let mut targets = ByteSet::empty();
        let mut base = MIN_FIXED_LEN;
        for c in text.chars() {
            let codeword = self
                .shortest
                .get_char(c)
                .ok_or_else(|| EncodeError::unsupported(c))?;
            base = base.max(codeword.len());
            targets.insert(c as u8);
        }

        let n = smallest_covering_len(self.support, base, &targets).ok_or(
            EncodeError::NoUniformLength {
                chars: text.chars().count(),
            },
        )?;
        debug!(base, n, distinct = targets.len(), "text length recommendation");
        Ok(n)
    }
}

/// Smallest `n >= start` with `targets` inside layer `n`.
///
/// Layers only grow along each parity, and once layer `k` equals layer
/// `k - 2` the sequence repeats with period 2, so the search stops there.
fn smallest_covering_len(support: &SupportSet, start: usize, targets: &ByteSet) -> Option<usize> {
    let mut layers = vec![ByteSet::from_bytes(&[0])];
    let mut k = 0;
    loop {
        let layer = &layers[k];
        if k >= start && layer.is_superset(targets) {
            return Some(k);
        }
        if k >= 2 && k > start && *layer == layers[k - 2] {
            return None;
        }
        let next = layer.xor_step(support.sorted());
        layers.push(next);
        k += 1;
    }
}
