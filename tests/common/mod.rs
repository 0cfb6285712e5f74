// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use xor_literal::SupportSet;

/// Printable punctuation and space: what survives a `[a-zA-Z0-9]` blocklist.
pub fn punctuation() -> SupportSet {
    let bytes: Vec<u8> = (33..=47)
        .chain(58..=64)
        .chain(91..=96)
        .chain(123..=126)
        .chain(std::iter::once(32))
        .collect();
    SupportSet::from_bytes(&bytes)
}

/// Every XOR value of every support-byte sequence of exactly `len` bytes,
/// by brute-force enumeration (no layering, no BFS).
pub fn xors_of_length(support: &SupportSet, len: usize) -> BTreeSet<u8> {
    fn walk(support: &[u8], remaining: usize, acc: u8, out: &mut BTreeSet<u8>) {
        if remaining == 0 {
            out.insert(acc);
            return;
        }
        for &c in support {
            walk(support, remaining - 1, acc ^ c, out);
        }
    }
    let mut out = BTreeSet::new();
    walk(support.bytes(), len, 0, &mut out);
    out
}

/// Position-wise XOR of the literal columns, as a string.
pub fn xor_columns(columns: &[Vec<u8>]) -> String {
    let len = columns.first().map_or(0, Vec::len);
    (0..len)
        .map(|i| char::from(columns.iter().fold(0u8, |acc, col| acc ^ col[i])))
        .collect()
}
