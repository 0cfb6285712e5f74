// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for alphabet construction, dictionary building, compilation,
//! and configuration.

/// Errors raised by the encoding core.
///
/// Every variant carries enough context (the offending value, character, or
/// length) for a caller to act on it without re-running the search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A support-set element is not a byte.
    #[error("support set contains invalid byte: {value}")]
    InvalidByte { value: i64 },

    /// A fixed-length dictionary was requested with fewer than two steps.
    #[error("fixed length must be at least {min}, got {len}")]
    InvalidLength { len: usize, min: usize },

    /// A character has no codeword of the required length.
    #[error("Character {character:?} (ord={ordinal}) not supported.")]
    UnsupportedCharacter { character: char, ordinal: u32 },

    /// Every character is reachable, but never all at one shared length.
    #[error("no single codeword length encodes every character of a {chars}-character input")]
    NoUniformLength { chars: usize },

    /// A rendered expression could not be read back.
    #[error("malformed expression at offset {offset}: {message}")]
    MalformedExpression { offset: usize, message: String },
}

impl EncodeError {
    /// Build an `UnsupportedCharacter` error for `character`.
    pub fn unsupported(character: char) -> Self {
        EncodeError::UnsupportedCharacter {
            character,
            ordinal: character as u32,
        }
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not readable: {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
