// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line interface for xorlit.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;

use xor_literal::config::{CliOverrides, Config};
use xor_literal::{DictionaryMode, EncodeError, Expression, Quote, XorEncoder};

/// Rewrite a string as XOR-joined quoted literals drawn from a restricted alphabet
#[derive(Parser, Debug)]
#[command(name = "xorlit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// String to encode
    #[arg(value_name = "STRING", required_unless_present = "dump_dictionary")]
    pub string: Option<String>,

    /// Number of literals (codeword length) [default: 3]
    #[arg(long, value_name = "N")]
    pub fixed_len: Option<usize>,

    /// Characters allowed inside literals [default: 0123456789+-*/().~^|&]
    #[arg(long, value_name = "CHARS")]
    pub support_chars: Option<String>,

    /// Allow every printable ASCII character this regex does not match
    #[arg(long, value_name = "REGEX", conflicts_with = "support_chars")]
    pub blocked_regex: Option<String>,

    /// Pick the smallest length that encodes STRING
    #[arg(long, conflicts_with = "fixed_len")]
    pub auto_len: bool,

    /// Quote style of the literals [default: single]
    #[arg(long, value_enum)]
    pub quote: Option<Quote>,

    /// Print the active dictionary
    #[arg(long)]
    pub dump_dictionary: bool,

    /// Dictionary dump format
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,

    /// Parse the rendered expression back and check it decodes to STRING
    #[arg(long)]
    pub verify: bool,

    /// Exit with status 2 when STRING cannot be encoded
    #[arg(long)]
    pub strict: bool,

    /// Config file [default: ./xorlit.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long)]
    pub quiet: bool,
}

/// Dictionary dump formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Text,
    Json,
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The expression (or dictionary) was printed.
    Encoded,
    /// `Error: ...` was printed for an unencodable input.
    Unsupported,
}

/// Process exit status for the result of [`run`].
///
/// 0 on success, and on unsupported input unless `strict` (then 2); 1 on
/// any other error.
pub fn exit_code(result: &Result<Outcome>, strict: bool) -> i32 {
    match result {
        Ok(Outcome::Encoded) => 0,
        Ok(Outcome::Unsupported) if strict => 2,
        Ok(Outcome::Unsupported) => 0,
        Err(_) => 1,
    }
}

impl Cli {
    /// Initialize logging from `-v`/`-q` and `XORLIT_LOG`.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        xor_literal::logging::init_tracing(self.verbose);
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            fixed_len: self.fixed_len,
            support_chars: self.support_chars.clone(),
            blocked_regex: self.blocked_regex.clone(),
            quote: self.quote,
            auto_len: self.auto_len,
        }
    }
}

/// Run the command, writing results to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref(), Some(&cli.overrides()))
        .context("Failed to load configuration")?;
    let support = config.support_set()?;
    info!(support = %support, "support set");

    let encoder = match (config.auto_len, cli.string.as_deref()) {
        (true, Some(text)) => XorEncoder::for_text(support, text),
        (true, None) => XorEncoder::new(support, DictionaryMode::Recommended),
        (false, _) => XorEncoder::with_fixed_len(support, config.fixed_len),
    };
    let encoder = match encoder {
        Ok(encoder) => encoder,
        Err(e @ (EncodeError::UnsupportedCharacter { .. } | EncodeError::NoUniformLength { .. })) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(Outcome::Unsupported);
        }
        Err(e) => return Err(e.into()),
    };

    if cli.dump_dictionary {
        let dictionary = encoder.dictionary();
        match cli.format {
            DumpFormat::Text => write!(out, "{}", dictionary)?,
            DumpFormat::Json => writeln!(out, "{}", dictionary.to_json()?)?,
        }
    }

    let Some(text) = cli.string.as_deref() else {
        return Ok(Outcome::Encoded);
    };

    let expression = match encoder.encode(text) {
        Ok(expression) => expression,
        Err(e @ EncodeError::UnsupportedCharacter { .. }) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(Outcome::Unsupported);
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = expression.render(config.quote);
    if cli.verify {
        let decoded = Expression::parse(&rendered)
            .context("Rendered expression does not parse")?
            .decode();
        if decoded != text {
            bail!("Rendered expression decodes to {:?}, not {:?}", decoded, text);
        }
        info!("verified round trip");
    }
    writeln!(out, "{}", rendered)?;
    Ok(Outcome::Encoded)
}
