use anyhow::{Context, Result};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, Select, Text};

use super::Prompter;

/// Interactive prompter for a real terminal session.
///
/// Construction installs the house render config globally, so every prompt
/// in the run shares the same look.
pub struct TuiPrompter;

impl TuiPrompter {
    pub fn new() -> Self {
        inquire::set_global_render_config(entigen_theme());
        Self
    }
}

impl Default for TuiPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TuiPrompter {
    fn input(&mut self, message: &str, help: Option<&str>) -> Result<String> {
        let mut prompt = Text::new(message);
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        prompt.prompt().context("failed to read text input")
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize> {
        let choice = Select::new(message, options.to_vec())
            .raw_prompt()
            .context("failed to read selection")?;
        Ok(choice.index)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Confirm::new(message)
            .with_default(true)
            .prompt()
            .context("failed to read confirmation")
    }
}

fn entigen_theme() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(Color::LightGreen),
        highlighted_option_prefix: Styled::new("❯").with_fg(Color::LightGreen),
        answer: StyleSheet::new().with_fg(Color::LightGreen),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}
