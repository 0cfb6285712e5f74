// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Byte dictionaries: for each byte, a sequence of support bytes XORing to it.
//!
//! The 256 byte values form the nodes of a Cayley graph under XOR: from node
//! `x` there is one edge `x -> x ^ c` for every support byte `c`. A codeword
//! for byte `b` is the edge labels along a walk from 0 to `b`.
//!
//! Two builders share that state space:
//!
//! - [`shortest::shortest_path_dictionary`]: BFS, minimal codeword per byte
//! - [`fixed::fixed_length_dictionary`]: layered reachability, every codeword
//!   exactly `n` long, so codewords line up column-wise
//!
//! [`recommend`] chooses a length `n` for the second builder from the first.
//!
//! Both builders iterate support bytes in ascending order, so the first path
//! discovered for each byte is kept and the output is reproducible for a
//! given alphabet regardless of how the caller ordered it.

pub mod fixed;
pub mod recommend;
pub mod shortest;
pub mod statistics;

pub use fixed::{fixed_length_dictionary, reachable_at, MIN_FIXED_LEN};
pub use recommend::LengthRecommender;
pub use shortest::shortest_path_dictionary;
pub use statistics::{BuildStatistics, Counters};

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::errors::EncodeError;
use crate::support::{ByteSet, SupportSet, NBYTES};

/// An ordered sequence of support bytes whose XOR-reduction is its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Codeword(Vec<u8>);

impl Codeword {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// XOR of all bytes, left to right. The empty codeword reduces to 0.
    pub fn xor(&self) -> u8 {
        xor_reduce(&self.0)
    }
}

impl fmt::Display for Codeword {
    /// Format a codeword as "(50, 94)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", byte)?;
        }
        write!(f, ")")
    }
}

impl From<Vec<u8>> for Codeword {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// XOR-reduce a byte sequence.
pub fn xor_reduce(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b)
}

/// Which search produced a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "len", rename_all = "snake_case")]
pub enum DictionaryKind {
    /// Minimal codewords, lengths vary per byte.
    ShortestPath,
    /// Every codeword has exactly this length.
    FixedLength(usize),
}

/// An immutable mapping from byte value to codeword.
///
/// Absent bytes are unreachable under this dictionary's kind; callers must
/// check membership before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    kind: DictionaryKind,
    entries: Vec<Option<Codeword>>,
    statistics: BuildStatistics,
}

impl Dictionary {
    pub(crate) fn from_entries(
        kind: DictionaryKind,
        entries: Vec<Option<Codeword>>,
        statistics: BuildStatistics,
    ) -> Self {
        debug_assert_eq!(entries.len(), NBYTES);
        Self {
            kind,
            entries,
            statistics,
        }
    }

    pub fn kind(&self) -> DictionaryKind {
        self.kind
    }

    /// The exact codeword length for fixed-length dictionaries.
    pub fn fixed_len(&self) -> Option<usize> {
        match self.kind {
            DictionaryKind::FixedLength(n) => Some(n),
            DictionaryKind::ShortestPath => None,
        }
    }

    /// Column count used when compiling against this dictionary.
    ///
    /// A fixed-length dictionary's `n`; for a shortest-path dictionary the
    /// longest codeword, so only bytes of that length are usable.
    pub fn width(&self) -> usize {
        self.fixed_len().unwrap_or_else(|| self.max_len())
    }

    pub fn get(&self, byte: u8) -> Option<&Codeword> {
        self.entries[byte as usize].as_ref()
    }

    /// Codeword for a character, if its ordinal is a byte and reachable.
    pub fn get_char(&self, c: char) -> Option<&Codeword> {
        u8::try_from(c as u32).ok().and_then(|b| self.get(b))
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.entries[byte as usize].is_some()
    }

    /// Number of reachable bytes.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Longest codeword, 0 for an empty dictionary.
    pub fn max_len(&self) -> usize {
        self.iter().map(|(_, cw)| cw.len()).max().unwrap_or(0)
    }

    /// Iterate over present entries, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Codeword)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(b, e)| e.as_ref().map(|cw| (b as u8, cw)))
    }

    /// The set of bytes present in this dictionary.
    pub fn reachable(&self) -> ByteSet {
        self.iter().map(|(b, _)| b).collect()
    }

    pub fn statistics(&self) -> &BuildStatistics {
        &self.statistics
    }

    /// Force every codeword to length `n` by appending cancelling pairs.
    ///
    /// A codeword of length `m <= n` with `n - m` even is extended with
    /// `(s, s)` pairs, `s` the smallest support byte; `s ^ s = 0` so the
    /// XOR is unchanged. Bytes whose codeword is longer than `n` or of the
    /// wrong parity are dropped. The result may cover fewer bytes than
    /// [`fixed_length_dictionary`] at the same `n`.
    pub fn pad_to(&self, support: &SupportSet, n: usize) -> Result<Dictionary, EncodeError> {
        if n < MIN_FIXED_LEN {
            return Err(EncodeError::InvalidLength {
                len: n,
                min: MIN_FIXED_LEN,
            });
        }
        let mut entries = vec![None; NBYTES];
        let mut statistics = BuildStatistics::new();
        if let Some(pad) = support.min() {
            for (byte, codeword) in self.iter() {
                let m = codeword.len();
                if m > n || (n - m) % 2 != 0 {
                    continue;
                }
                let mut bytes = codeword.as_slice().to_vec();
                bytes.resize(n, pad);
                entries[byte as usize] = Some(Codeword(bytes));
                statistics.increment(Counters::CodewordsEmitted);
            }
        }
        Ok(Dictionary::from_entries(
            DictionaryKind::FixedLength(n),
            entries,
            statistics,
        ))
    }

    /// Serialize the dictionary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct DictionaryView<'a> {
            kind: DictionaryKind,
            reachable: usize,
            entries: BTreeMap<u8, &'a Codeword>,
        }

        let view = DictionaryView {
            kind: self.kind,
            reachable: self.len(),
            entries: self.iter().collect(),
        };
        serde_json::to_string_pretty(&view)
    }
}

impl fmt::Display for Dictionary {
    /// One line per reachable byte: `" 65: (32, 33, 64)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (byte, codeword) in self.iter() {
            writeln!(f, "{:3}: {}", byte, codeword)?;
        }
        Ok(())
    }
}
