// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tracing initialization.
//!
//! Output goes to stderr so it never mixes with the expression on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "XORLIT_LOG";

static INIT: Once = Once::new();

/// Default filter level for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber.
///
/// Reads `XORLIT_LOG` (e.g. `XORLIT_LOG=xor_literal=debug`), falling back to
/// the level implied by `verbose`. Idempotent; later calls are ignored.
pub fn init_tracing(verbose: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose >= 2),
            )
            .with(filter)
            .init();
    });
}
