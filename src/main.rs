use anyhow::Result;
use clap::Parser;
use std::env;

use entigen::cli::{run_new, Args, Command};
use entigen::prompt::TuiPrompter;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::New {
            output,
            dry_run,
            json,
        } => {
            let cwd = env::current_dir()?;
            let mut prompter = TuiPrompter::new();
            run_new(&mut prompter, &cwd, output.as_deref(), dry_run, json)
        }
    }
}
