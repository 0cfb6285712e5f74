// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Encoder configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied via `apply_cli_overrides`)
//! 2. Environment variables (`XORLIT_*`)
//! 3. Config file (`--config <path>`, else `xorlit.toml` in the working directory)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compiler::Quote;
use crate::dictionary::MIN_FIXED_LEN;
use crate::errors::ConfigError;
use crate::support::{SupportSet, DEFAULT_SUPPORT_CHARS};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "xorlit.toml";

/// Default codeword length of the command-line tool.
pub const DEFAULT_FIXED_LEN: usize = 3;

/// Resolved encoder settings.
///
/// Unknown keys in a config file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Codeword length. Default: 3.
    pub fixed_len: usize,
    /// Characters forming the support set.
    pub support_chars: String,
    /// Blocklist regex; when set, the support set is the printable ASCII it
    /// does not match, and `support_chars` is ignored.
    pub blocked_regex: Option<String>,
    /// Quote style of rendered literals. Default: single.
    pub quote: Quote,
    /// Size the dictionary for the input instead of using `fixed_len`.
    pub auto_len: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixed_len: DEFAULT_FIXED_LEN,
            support_chars: DEFAULT_SUPPORT_CHARS.to_string(),
            blocked_regex: None,
            quote: Quote::Single,
            auto_len: false,
        }
    }
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub fixed_len: Option<usize>,
    pub support_chars: Option<String>,
    pub blocked_regex: Option<String>,
    pub quote: Option<Quote>,
    pub auto_len: bool,
}

impl Config {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must be readable; the implicit `xorlit.toml` is
    /// only read if it exists.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let implicit = PathBuf::from(CONFIG_FILE_NAME);
                implicit.exists().then_some(implicit)
            }
        };

        let mut config = match file {
            Some(ref p) => Self::from_file(p)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        debug!(?file, ?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `XORLIT_*` variables, looked up through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("XORLIT_FIXED_LEN") {
            self.fixed_len = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "XORLIT_FIXED_LEN".to_string(),
                message: format!("not a length: {:?}", value),
            })?;
        }
        if let Some(value) = lookup("XORLIT_SUPPORT_CHARS") {
            self.support_chars = value;
            // Same rule as `--support-chars`; XORLIT_BLOCKED_REGEX below still wins.
            self.blocked_regex = None;
        }
        if let Some(value) = lookup("XORLIT_BLOCKED_REGEX") {
            self.blocked_regex = Some(value);
        }
        if let Some(value) = lookup("XORLIT_QUOTE") {
            self.quote = <Quote as clap::ValueEnum>::from_str(value.trim(), true).map_err(|_| {
                ConfigError::InvalidValue {
                    field: "XORLIT_QUOTE".to_string(),
                    message: format!("expected single or double, got {:?}", value),
                }
            })?;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(n) = cli.fixed_len {
            self.fixed_len = n;
            // An explicit length beats a configured `auto_len`.
            self.auto_len = false;
        }
        if let Some(ref chars) = cli.support_chars {
            self.support_chars = chars.clone();
            // An explicit alphabet on the command line beats a configured blocklist.
            if cli.blocked_regex.is_none() {
                self.blocked_regex = None;
            }
        }
        if let Some(ref pattern) = cli.blocked_regex {
            self.blocked_regex = Some(pattern.clone());
        }
        if let Some(quote) = cli.quote {
            self.quote = quote;
        }
        if cli.auto_len {
            self.auto_len = true;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fixed_len < MIN_FIXED_LEN && !self.auto_len {
            return Err(ConfigError::ValidationFailed {
                field: "fixed_len".to_string(),
                message: format!("must be at least {}", MIN_FIXED_LEN),
            });
        }
        self.support_set().map(|_| ())
    }

    /// The support set these settings describe.
    pub fn support_set(&self) -> Result<SupportSet, ConfigError> {
        match self.blocked_regex {
            Some(ref pattern) => {
                let regex = Regex::new(pattern).map_err(|e| ConfigError::ValidationFailed {
                    field: "blocked_regex".to_string(),
                    message: e.to_string(),
                })?;
                Ok(SupportSet::from_blocked_pattern(&regex))
            }
            None => SupportSet::from_chars(&self.support_chars).map_err(|e| {
                ConfigError::ValidationFailed {
                    field: "support_chars".to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }
}
