//! CLI argument definitions for Porter.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "porter",
    version,
    about = "Publish Maven artifacts through the Sonatype Central Portal",
    long_about = "Porter uploads built library artifacts to Maven Central's snapshot or \
                  staging repositories and promotes open staging repositories for release."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize Porter in an existing directory
    Init,

    /// Upload artifacts, then promote the staging repository for releases
    Publish {
        /// List what would be uploaded without any network calls
        #[arg(long)]
        dry_run: bool,
    },

    /// Promote open staging repositories without uploading
    Promote,

    /// Print resolved portal credentials
    Env {
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
