//! Implementation of `kwm init`.

use std::{fs, path::PathBuf, process::ExitCode};

use kwm_config::{
    CONFIG_FILENAME, ConfigError, ConfigLocations, global_template, home_config_path,
    local_template,
};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented keyword config template.
///
/// Without `--global` the file goes in the working directory and becomes the
/// project config for pages analyzed there. Reports when the new file changes
/// which configs apply to the working directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let path = match target_path(ctx, cmd.global) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if path.exists() && !cmd.force {
        eprintln!("error: {} already exists", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let before = ConfigLocations::discover(&ctx.cwd);
    let template = if cmd.global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(&path, template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }
    println!("Created {}", path.display());

    let after = ConfigLocations::discover(&ctx.cwd);
    if let Some(outer) = before.project
        && after.project.as_ref() != Some(&outer)
    {
        println!(
            "note: {} no longer applies to pages analyzed in {}",
            outer.display(),
            ctx.cwd.display()
        );
    }
    if cmd.global
        && after.home.is_none()
        && let Some(project) = &after.project
        && *project != path
    {
        println!(
            "note: {} sets root = true, so the new file is ignored here",
            project.display()
        );
    }
    ExitCode::SUCCESS
}

/// Picks the project or home config path.
fn target_path(ctx: &CommandContext, global: bool) -> Result<PathBuf, ConfigError> {
    if global {
        home_config_path()
    } else {
        Ok(ctx.cwd.join(CONFIG_FILENAME))
    }
}
