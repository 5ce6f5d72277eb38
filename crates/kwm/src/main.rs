//! Command-line entry point for `kwm`.

use std::process::ExitCode;

use clap::Parser;
use kwm::cli::{Cli, commands, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    commands::run(cli.command, cli.verbose)
}
