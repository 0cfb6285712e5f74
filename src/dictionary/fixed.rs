// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-length dictionary: layered reachability over `n + 1` layers.
//!
//! Layer `k` holds the bytes reachable by XORing exactly `k` support bytes.
//! Layer 0 is `{0}`. Each state in layer `k` remembers a witness, the state in
//! layer `k - 1` it was first reached from and the support byte used. Walking
//! witnesses back from layer `n` yields a codeword of length exactly `n`.
//!
//! A byte reachable at some other length but not at exactly `n` is absent.
//! Because `c ^ c = 0`, layer `k` is contained in layer `k + 2` whenever the
//! support set is non-empty, so lengths of equal parity only ever gain bytes.

use tracing::{debug, trace};

use super::{BuildStatistics, Codeword, Counters, Dictionary, DictionaryKind};
use crate::errors::EncodeError;
use crate::support::{ByteSet, SupportSet, NBYTES};

/// Shortest codeword length a fixed-length dictionary accepts.
///
/// With `n = 1` only the support bytes themselves are encodable and with
/// `n = 0` only byte 0, neither of which is useful for compilation.
pub const MIN_FIXED_LEN: usize = 2;

/// Witness for a state in one layer.
#[derive(Debug, Clone, Copy)]
struct Witness {
    prev: u8,
    edge: u8,
}

/// Build the dictionary of length-`n` codewords for `support`.
///
/// Fails with [`EncodeError::InvalidLength`] when `n < 2`.
///
/// # Examples
///
/// ```
/// use xor_literal::{fixed_length_dictionary, SupportSet};
///
/// let support = SupportSet::from_bytes(&[1]);
///
/// // An even number of 1s cancels out, an odd number does not.
/// let even = fixed_length_dictionary(&support, 2).unwrap();
/// assert_eq!(even.get(0).unwrap().as_slice(), &[1, 1]);
/// assert!(even.get(1).is_none());
///
/// let odd = fixed_length_dictionary(&support, 3).unwrap();
/// assert_eq!(odd.get(1).unwrap().as_slice(), &[1, 1, 1]);
/// assert!(odd.get(0).is_none());
/// ```
pub fn fixed_length_dictionary(support: &SupportSet, n: usize) -> Result<Dictionary, EncodeError> {
    if n < MIN_FIXED_LEN {
        return Err(EncodeError::InvalidLength {
            len: n,
            min: MIN_FIXED_LEN,
        });
    }

    let mut statistics = BuildStatistics::new();
    let mut layers: Vec<[Option<Witness>; NBYTES]> = vec![[None; NBYTES]; n + 1];
    let mut reached = ByteSet::from_bytes(&[0]);

    for k in 1..=n {
        let layer = &mut layers[k];
        let mut next = ByteSet::empty();
        for prev in reached.iter() {
            statistics.increment(Counters::StatesVisited);
            for &c in support.sorted() {
                statistics.increment(Counters::EdgesExamined);
                let x = prev ^ c;
                if layer[x as usize].is_none() {
                    layer[x as usize] = Some(Witness { prev, edge: c });
                    next.insert(x);
                }
            }
        }
        trace!(layer = k, reachable = next.len(), "expanded layer");
        reached = next;
    }

    let mut entries = vec![None; NBYTES];
    for target in reached.iter() {
        let mut path = Vec::with_capacity(n);
        let mut cur = target;
        for k in (1..=n).rev() {
            let Some(Witness { prev, edge }) = layers[k][cur as usize] else {
                unreachable!("layer {} lost the witness for {}", k, cur);
            };
            path.push(edge);
            cur = prev;
        }
        path.reverse();
        entries[target as usize] = Some(Codeword::new(path));
        statistics.increment(Counters::CodewordsEmitted);
    }

    let dictionary =
        Dictionary::from_entries(DictionaryKind::FixedLength(n), entries, statistics);
    debug!(
        n,
        support = support.len(),
        reachable = dictionary.len(),
        stats = %dictionary.statistics(),
        "built fixed-length dictionary"
    );
    Ok(dictionary)
}

/// The set of bytes reachable with exactly `n` support bytes.
///
/// Same layering as [`fixed_length_dictionary`] without recording witnesses;
/// accepts any `n`, including 0 (`{0}`) and 1 (the support set).
pub fn reachable_at(support: &SupportSet, n: usize) -> ByteSet {
    let mut reached = ByteSet::from_bytes(&[0]);
    for _ in 0..n {
        reached = reached.xor_step(support.sorted());
    }
    reached
}
