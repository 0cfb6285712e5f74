// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ByteSet type for representing sets of byte values as bitsets.
//!
//! A ByteSet is a compact representation of a subset of `0..=255`, where bit
//! `b` of the 256-bit word array is set if byte `b` is in the set.
//!
//! # Examples
//!
//! ```
//! use xor_literal::support::ByteSet;
//!
//! let mut set = ByteSet::empty();
//! set.insert(b'a');
//! set.insert(b'0');
//! set.insert(b'a');
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{48, 97}");
//!
//! // Iteration is always ascending.
//! let bytes: Vec<u8> = set.iter().collect();
//! assert_eq!(bytes, vec![b'0', b'a']);
//! ```

use std::fmt;

/// Number of distinct byte values (states in the XOR graph).
pub const NBYTES: usize = 256;

const WORDS: usize = NBYTES / 64;

/// A set of byte values represented as a bitset.
///
/// O(1) insert and contains; iteration yields bytes in ascending
/// order, which the searches rely on for deterministic tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet([u64; WORDS]);

impl ByteSet {
    /// Create an empty byte set.
    pub const fn empty() -> Self {
        Self([0; WORDS])
    }

    /// Create a byte set from a slice of bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::empty();
        for &byte in bytes {
            set.insert(byte);
        }
        set
    }

    /// Check if the set contains a specific byte.
    pub fn contains(&self, byte: u8) -> bool {
        (self.0[byte as usize / 64] >> (byte % 64)) & 1 != 0
    }

    /// Insert a byte. Returns true if it was not already present.
    pub fn insert(&mut self, byte: u8) -> bool {
        let was_present = self.contains(byte);
        self.0[byte as usize / 64] |= 1 << (byte % 64);
        !was_present
    }

    /// Get the number of bytes in the set (population count).
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// True if every byte of `other` is also in `self`.
    pub fn is_superset(&self, other: &ByteSet) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| b & !a == 0)
    }

    /// One XOR step: every `x ^ c` for `x` in `self` and `c` in `steps`.
    pub fn xor_step(&self, steps: &[u8]) -> ByteSet {
        let mut next = ByteSet::empty();
        for x in self.iter() {
            for &c in steps {
                next.insert(x ^ c);
            }
        }
        next
    }

    /// Iterate over all bytes in the set, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..NBYTES).filter_map(move |b| {
            let byte = b as u8;
            self.contains(byte).then_some(byte)
        })
    }
}

impl fmt::Display for ByteSet {
    /// Format a byte set as "{1, 2, 3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, byte) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", byte)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = ByteSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_insert_contains_across_words() {
        let mut set = ByteSet::empty();
        assert!(set.insert(0));
        assert!(set.insert(63));
        assert!(set.insert(64));
        assert!(set.insert(255));
        assert!(!set.insert(64));

        assert_eq!(set.len(), 4);
        assert!(set.contains(63));
        assert!(set.contains(64));
        assert!(!set.contains(65));
    }

    #[test]
    fn test_iter_ascending() {
        let set = ByteSet::from_bytes(&[200, 3, 70, 3]);
        let bytes: Vec<u8> = set.iter().collect();
        assert_eq!(bytes, vec![3, 70, 200]);
    }

    #[test]
    fn test_superset() {
        let big = ByteSet::from_bytes(&[1, 2, 3, 100]);
        let small = ByteSet::from_bytes(&[2, 100]);
        assert!(big.is_superset(&small));
        assert!(!small.is_superset(&big));
        assert!(small.is_superset(&ByteSet::empty()));
    }

    #[test]
    fn test_collect() {
        let set: ByteSet = [9u8, 200, 9].into_iter().collect();
        assert_eq!(set, ByteSet::from_bytes(&[9, 200]));
    }

    #[test]
    fn test_xor_step() {
        let start = ByteSet::from_bytes(&[0]);
        let one = start.xor_step(&[3, 5]);
        assert_eq!(one.iter().collect::<Vec<_>>(), vec![3, 5]);

        let two = one.xor_step(&[3, 5]);
        assert_eq!(two.iter().collect::<Vec<_>>(), vec![0, 6]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ByteSet::empty()), "{}");
        assert_eq!(format!("{}", ByteSet::from_bytes(&[7, 1])), "{1, 7}");
    }
}
