// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The alphabet of byte values allowed inside rendered literals.

use std::fmt;

use regex::Regex;

use crate::errors::EncodeError;
use crate::support::ByteSet;

/// Default alphabet of the command-line tool.
pub const DEFAULT_SUPPORT_CHARS: &str = "0123456789+-*/().~^|&";

/// First and last printable ASCII bytes, the universe for blocklist alphabets.
const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7e;

/// An immutable, deduplicated set of support bytes.
///
/// Keeps two views of the same bytes:
/// - `bytes`: first-seen order, as supplied by the caller
/// - `sorted`: ascending order, the fixed iteration order of every search
///
/// Sorting once here makes the searches' tie-breaks independent of the
/// order in which the caller listed the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportSet {
    bytes: Vec<u8>,
    sorted: Vec<u8>,
    members: ByteSet,
}

impl SupportSet {
    /// Build a support set from integers, rejecting anything outside `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xor_literal::SupportSet;
    ///
    /// let support = SupportSet::new([50, 40, 50, 45]).unwrap();
    /// assert_eq!(support.bytes(), &[50, 40, 45]);
    /// assert_eq!(support.sorted(), &[40, 45, 50]);
    ///
    /// assert!(SupportSet::new([1, 256]).is_err());
    /// ```
    pub fn new<I, T>(values: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<i64>,
    {
        let mut bytes = Vec::new();
        for value in values {
            let value = value.into();
            let byte = u8::try_from(value).map_err(|_| EncodeError::InvalidByte { value })?;
            bytes.push(byte);
        }
        Ok(Self::from_bytes(&bytes))
    }

    /// Build a support set from raw bytes. Never fails.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut members = ByteSet::empty();
        let bytes: Vec<u8> = bytes.iter().copied().filter(|&b| members.insert(b)).collect();
        let sorted = members.iter().collect();
        Self {
            bytes,
            sorted,
            members,
        }
    }

    /// Build a support set from the ordinals of the characters of `chars`.
    pub fn from_chars(chars: &str) -> Result<Self, EncodeError> {
        Self::new(chars.chars().map(|c| c as u32))
    }

    /// Printable ASCII (space through `~`) minus every character `blocked` matches.
    ///
    /// This mirrors a filter that rejects input by regex: the resulting
    /// alphabet is everything that would pass the filter.
    pub fn from_blocked_pattern(blocked: &Regex) -> Self {
        let mut buf = [0u8; 4];
        let allowed: Vec<u8> = PRINTABLE
            .filter(|&b| !blocked.is_match((b as char).encode_utf8(&mut buf)))
            .collect();
        Self::from_bytes(&allowed)
    }

    /// Bytes in first-seen order.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes in ascending order.
    pub fn sorted(&self) -> &[u8] {
        &self.sorted
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.members.contains(byte)
    }

    /// The support bytes as a bitset.
    pub fn members(&self) -> &ByteSet {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Smallest support byte, if any.
    pub fn min(&self) -> Option<u8> {
        self.sorted.first().copied()
    }
}

impl Default for SupportSet {
    fn default() -> Self {
        Self::from_bytes(DEFAULT_SUPPORT_CHARS.as_bytes())
    }
}

impl fmt::Display for SupportSet {
    /// Format the alphabet as its characters in first-seen order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.bytes {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}
