// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! xorlit - encode a string as XOR-joined literals over a restricted alphabet.

mod cli;

use std::process;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let stdout = std::io::stdout();
    let result = cli::run(&cli, &mut stdout.lock());
    if let Err(ref e) = result {
        eprintln!("Error: {:#}", e);
    }
    let code = cli::exit_code(&result, cli.strict);
    if code != 0 {
        process::exit(code);
    }
}
