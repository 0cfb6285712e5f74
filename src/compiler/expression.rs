// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compiled XOR expressions: literal columns, rendering, and reading back.
//!
//! An expression is `n` byte strings (columns). Rendered, each column becomes
//! one quoted literal and the literals are joined with `^`, so a PHP-style
//! evaluator XORs them position by position. Each byte renders as the
//! character with the same code point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EncodeError;

/// XOR operator placed between literals.
pub const XOR_OPERATOR: char = '^';

/// Quote style of rendered literals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    /// `'...'`, escaping `\` and `'`.
    #[default]
    Single,
    /// `"..."`, escaping `\`, `"` and `$`.
    Double,
}

impl Quote {
    pub fn delimiter(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    fn needs_escape(self, c: char) -> bool {
        match self {
            Quote::Single => c == '\\' || c == '\'',
            Quote::Double => c == '\\' || c == '"' || c == '$',
        }
    }

    fn from_delimiter(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }
}

/// `n` literal columns whose position-wise XOR is the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    columns: Vec<Vec<u8>>,
}

impl Expression {
    pub fn from_columns(columns: Vec<Vec<u8>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Vec<u8>] {
        &self.columns
    }

    /// Number of literals.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// XOR the columns position by position.
    ///
    /// Columns of unequal length are truncated to the shortest, as PHP does
    /// for string XOR. An expression without columns evaluates to nothing.
    pub fn evaluate(&self) -> Vec<u8> {
        let Some(len) = self.columns.iter().map(Vec::len).min() else {
            return Vec::new();
        };
        (0..len)
            .map(|i| self.columns.iter().fold(0u8, |acc, col| acc ^ col[i]))
            .collect()
    }

    /// The evaluated bytes as a string, one character per byte.
    pub fn decode(&self) -> String {
        self.evaluate().into_iter().map(char::from).collect()
    }

    /// Render as `'..'^'..'^'..'`.
    pub fn render(&self, quote: Quote) -> String {
        let delimiter = quote.delimiter();
        let mut out = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push(XOR_OPERATOR);
            }
            out.push(delimiter);
            for &byte in column {
                let c = char::from(byte);
                if quote.needs_escape(c) {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push(delimiter);
        }
        out
    }

    /// Read back an expression produced by [`Expression::render`].
    ///
    /// Accepts either quote style per literal and whitespace around `^`.
    /// Escapes other than the ones `render` emits are kept verbatim,
    /// backslash included.
    ///
    /// # Examples
    ///
    /// ```
    /// use xor_literal::Expression;
    ///
    /// let expr = Expression::parse(r"'&&' ^ '6+' ^ '|~'").unwrap();
    /// assert_eq!(expr.width(), 3);
    /// assert_eq!(expr.decode(), "ls");
    /// ```
    pub fn parse(text: &str) -> Result<Self, EncodeError> {
        let mut parser = Parser {
            chars: text.char_indices().peekable(),
            len: text.len(),
        };
        let mut columns = Vec::new();
        loop {
            parser.skip_whitespace();
            columns.push(parser.literal()?);
            parser.skip_whitespace();
            match parser.chars.next() {
                None => break,
                Some((_, XOR_OPERATOR)) => continue,
                Some((offset, c)) => {
                    return Err(malformed(offset, format!("expected '^', found {:?}", c)));
                }
            }
        }
        Ok(Self { columns })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Quote::default()))
    }
}

fn malformed(offset: usize, message: impl Into<String>) -> EncodeError {
    EncodeError::MalformedExpression {
        offset,
        message: message.into(),
    }
}

struct Parser<'t> {
    chars: std::iter::Peekable<std::str::CharIndices<'t>>,
    len: usize,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn literal(&mut self) -> Result<Vec<u8>, EncodeError> {
        let (start, open) = self
            .chars
            .next()
            .ok_or_else(|| malformed(self.len, "expected a quoted literal"))?;
        let quote = Quote::from_delimiter(open)
            .ok_or_else(|| malformed(start, format!("expected a quote, found {:?}", open)))?;

        let mut bytes = Vec::new();
        loop {
            let (offset, c) = self
                .chars
                .next()
                .ok_or_else(|| malformed(start, "unterminated literal"))?;
            let c = if c == quote.delimiter() {
                return Ok(bytes);
            } else if c == '\\' {
                match self.chars.next_if(|&(_, next)| quote.needs_escape(next)) {
                    Some((_, escaped)) => escaped,
                    None => c,
                }
            } else {
                c
            };
            let byte = u8::try_from(c as u32)
                .map_err(|_| malformed(offset, format!("character {:?} is not a byte", c)))?;
            bytes.push(byte);
        }
    }
}
