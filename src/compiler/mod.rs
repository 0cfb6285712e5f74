// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compiling strings into XOR expressions.
//!
//! Compilation runs in two passes:
//!
//! 1. **Encode**: look up every character's codeword and check it has the
//!    compiler's width. Any failure aborts before a single column exists.
//! 2. **Transpose**: column `i` is the `i`-th byte of every codeword, in
//!    input order.
//!
//! XORing the columns position by position gives back, for each character,
//! the XOR of its codeword, which is the character itself.

pub mod expression;

pub use expression::{Expression, Quote, XOR_OPERATOR};

use tracing::debug;

use crate::dictionary::{Codeword, Dictionary, MIN_FIXED_LEN};
use crate::errors::EncodeError;

/// One codeword per input character, all of the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedString<'d> {
    codewords: Vec<&'d Codeword>,
    width: usize,
}

impl<'d> EncodedString<'d> {
    pub fn codewords(&self) -> &[&'d Codeword] {
        &self.codewords
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Turn per-character codewords into per-position literal columns.
    pub fn transpose(&self) -> Expression {
        let columns = (0..self.width)
            .map(|i| self.codewords.iter().map(|cw| cw.as_slice()[i]).collect())
            .collect();
        Expression::from_columns(columns)
    }
}

/// Compiles strings against one dictionary.
///
/// The compiler's width is the dictionary's [`Dictionary::width`]: `n` for
/// a fixed-length dictionary. Against a shortest-path dictionary only bytes
/// whose minimal codeword is the longest one are accepted; pad it with
/// [`Dictionary::pad_to`] or use a fixed-length dictionary instead.
///
/// # Examples
///
/// ```
/// use xor_literal::{fixed_length_dictionary, ExpressionCompiler, SupportSet};
///
/// let support = SupportSet::default();
/// let dict = fixed_length_dictionary(&support, 3).unwrap();
/// let expr = ExpressionCompiler::new(&dict).compile("ls").unwrap();
///
/// assert_eq!(expr.to_string(), "'&&'^'6+'^'|~'");
/// assert_eq!(expr.decode(), "ls");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpressionCompiler<'d> {
    dictionary: &'d Dictionary,
    width: usize,
}

impl<'d> ExpressionCompiler<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            width: dictionary.width(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Look up every character, failing on the first without a codeword of
    /// exactly the compiler's width.
    ///
    /// A width below 2 is an `InvalidLength`, whatever the input.
    pub fn encode(&self, text: &str) -> Result<EncodedString<'d>, EncodeError> {
        if self.width < MIN_FIXED_LEN {
            return Err(EncodeError::InvalidLength {
                len: self.width,
                min: MIN_FIXED_LEN,
            });
        }
        let codewords = text
            .chars()
            .map(|c| {
                self.dictionary
                    .get_char(c)
                    .filter(|cw| cw.len() == self.width)
                    .ok_or_else(|| EncodeError::unsupported(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EncodedString {
            codewords,
            width: self.width,
        })
    }

    /// Compile `text` into `width` literal columns.
    pub fn compile(&self, text: &str) -> Result<Expression, EncodeError> {
        let encoded = self.encode(text)?;
        let expression = encoded.transpose();
        debug!(
            chars = encoded.codewords().len(),
            width = self.width,
            "compiled expression"
        );
        Ok(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{fixed_length_dictionary, shortest_path_dictionary};
    use crate::support::SupportSet;

    #[test]
    fn test_compile_ls_default_alphabet() {
        let dict = fixed_length_dictionary(&SupportSet::default(), 3).unwrap();
        let expr = ExpressionCompiler::new(&dict).compile("ls").unwrap();
        assert_eq!(
            expr.columns(),
            &[b"&&".to_vec(), b"6+".to_vec(), b"|~".to_vec()]
        );
    }

    #[test]
    fn test_encode_keeps_input_order() {
        let dict = fixed_length_dictionary(&SupportSet::default(), 3).unwrap();
        let encoded = ExpressionCompiler::new(&dict).encode("sl").unwrap();
        assert_eq!(encoded.width(), 3);
        assert_eq!(encoded.codewords()[0].as_slice(), &[38, 43, 126]);
        assert_eq!(encoded.codewords()[1].as_slice(), &[38, 54, 124]);
    }

    #[test]
    fn test_unsupported_character_fails_atomically() {
        let dict = fixed_length_dictionary(&SupportSet::default(), 3).unwrap();
        let compiler = ExpressionCompiler::new(&dict);
        // Byte 1 is not reachable with exactly three default support bytes.
        assert_eq!(
            compiler.compile("ls\u{1}"),
            Err(EncodeError::UnsupportedCharacter {
                character: '\u{1}',
                ordinal: 1
            })
        );
        assert_eq!(
            compiler.compile("é"),
            Err(EncodeError::unsupported('é'))
        );
    }

    #[test]
    fn test_empty_input_gives_empty_columns() {
        let dict = fixed_length_dictionary(&SupportSet::default(), 3).unwrap();
        let expr = ExpressionCompiler::new(&dict).compile("").unwrap();
        assert_eq!(expr.width(), 3);
        assert_eq!(expr.to_string(), "''^''^''");
    }

    #[test]
    fn test_shortest_path_dictionary_only_accepts_longest_codewords() {
        let support = SupportSet::default();
        let dict = shortest_path_dictionary(&support);
        let compiler = ExpressionCompiler::new(&dict);
        assert_eq!(compiler.width(), 3);
        // 'l' has a two-byte shortest codeword.
        assert_eq!(compiler.compile("l"), Err(EncodeError::unsupported('l')));

        let padded = dict.pad_to(&support, 4).unwrap();
        let expr = ExpressionCompiler::new(&padded).compile("ls").unwrap();
        assert_eq!(expr.decode(), "ls");
    }

    #[test]
    fn test_narrow_shortest_path_dictionary_is_rejected() {
        // Empty support: only byte 0, with the empty codeword.
        let empty = shortest_path_dictionary(&SupportSet::from_bytes(&[]));
        assert_eq!(empty.width(), 0);
        assert_eq!(
            ExpressionCompiler::new(&empty).compile("\0\0"),
            Err(EncodeError::InvalidLength { len: 0, min: 2 })
        );

        let single = shortest_path_dictionary(&SupportSet::from_bytes(&[1]));
        assert_eq!(single.width(), 1);
        assert_eq!(
            ExpressionCompiler::new(&single).compile("\u{1}"),
            Err(EncodeError::InvalidLength { len: 1, min: 2 })
        );
        assert_eq!(
            ExpressionCompiler::new(&single).compile(""),
            Err(EncodeError::InvalidLength { len: 1, min: 2 })
        );
    }
}
