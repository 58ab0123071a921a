//! Command dispatch and handler modules.

mod env;
mod init;
mod promote;
mod publish;

use std::path::PathBuf;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init::exec(),
        Command::Publish { dry_run } => publish::exec(dry_run, cli.verbose).await,
        Command::Promote => promote::exec().await,
        Command::Env { reveal } => env::exec(reveal),
    }
}

/// Locate the project root: the nearest ancestor containing `Porter.toml`.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(porter_util::errors::PorterError::Io)?;
    porter_util::fs::find_ancestor_with(&cwd, "Porter.toml").ok_or_else(|| {
        porter_util::errors::PorterError::Manifest {
            message: "Could not find Porter.toml in this directory or any parent".to_string(),
        }
        .into()
    })
}
