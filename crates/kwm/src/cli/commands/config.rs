//! Implementation of `kwm config`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings and the files they came from.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.sources.is_empty() {
        println!("# no configuration files found, showing defaults");
    } else {
        println!("# sources (highest precedence first):");
        for path in &config.sources {
            println!("#   {}", path.display());
        }
    }

    for warning in config.validate() {
        println!("# warning: {warning}");
    }
    println!();

    match config.settings_to_toml() {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
