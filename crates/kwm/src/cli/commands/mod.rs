//! Command implementations and dispatch.

pub mod analyze;
pub mod config;
pub mod init;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Loads the context a command needs and dispatches to it.
pub fn run(command: Commands, verbose: u8) -> ExitCode {
    let loaded = match command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        Commands::Analyze(_) | Commands::Config => CommandContext::load(),
    };
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match command {
        Commands::Analyze(cmd) => analyze::run(&ctx, &cmd, verbose),
        Commands::Init(cmd) => init::run(&ctx, &cmd),
        Commands::Config => config::run(&ctx),
    }
}
