use anyhow::Result;
use console::{style, Emoji};
use std::path::Path;

use crate::collect::collect;
use crate::config::Config;
use crate::prompt::Prompter;
use crate::render::{render_entity, write_file};

static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");

/// Drive one generation run: load config, prompt, then render or report.
///
/// `root` is the project root; the config file is read from it and a
/// relative output directory resolves against it. The prompter is injected
/// so the whole flow can be driven without a terminal.
pub fn run_new(
    prompter: &mut dyn Prompter,
    root: &Path,
    output: Option<&Path>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load(root)?;
    let output_dir = match output {
        Some(dir) => root.join(dir),
        None => root.join(&config.output_dir),
    };

    if !json {
        print_banner();
    }

    let ctx = collect(prompter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
        return Ok(());
    }

    let file = render_entity(&ctx);

    if dry_run {
        println!();
        println!("{}", style(format!("# {}", file.relative_path)).dim());
        print!("{}", file.content);
        return Ok(());
    }

    let written = write_file(&output_dir, &file)?;

    println!();
    println!("{}Entity scaffold ready!\n", SUCCESS);
    println!("  Entity:   {}", style(&ctx.name).cyan());
    println!("  Method:   {}", style(ctx.api_type.http_method()).cyan());
    println!("  Params:   {}", style(ctx.params.len()).cyan());
    println!("  Created:  {}", style(written.display()).green());
    println!();

    Ok(())
}

fn print_banner() {
    println!();
    println!("  {}{}", SPARKLE, style("entigen").cyan().bold());
    println!("  {}", style("Scaffold a new entity module").dim());
    println!();
}
