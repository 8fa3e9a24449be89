use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scaffold entity API modules from interactive prompts.
#[derive(Debug, Parser)]
#[command(name = "entigen", version, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a new entity module
    New {
        /// Directory to write the generated file to (overrides entigen.toml)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Print the rendered file instead of writing it
        #[arg(long, conflicts_with = "json")]
        dry_run: bool,

        /// Print the collected generation context as JSON and skip rendering
        #[arg(long)]
        json: bool,
    },
}
