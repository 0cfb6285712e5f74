// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Byte alphabets.
//!
//! - ByteSet: a 256-bit set of byte values
//! - SupportSet: the validated, deduplicated alphabet of allowed bytes

pub mod byte_set;
pub mod support_set;

pub use byte_set::{ByteSet, NBYTES};
pub use support_set::{SupportSet, DEFAULT_SUPPORT_CHARS};
