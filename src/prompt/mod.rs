//! Interactive-prompt collaborator.
//!
//! The collector never touches a terminal directly; it talks to the
//! [`Prompter`] trait. [`TuiPrompter`] is the real `inquire`-backed session,
//! [`ScriptedPrompter`] plays back canned answers for tests and doctests.

mod script;
mod tui;

pub use script::ScriptedPrompter;
pub use tui::TuiPrompter;

use anyhow::Result;

/// The narrow interactive-I/O seam the collector talks to.
///
/// One method per question kind. `select` hands back the index of the chosen
/// option so the caller keeps the typed mapping. A failed or cancelled
/// question is the terminal failure of the whole generation run; there is no
/// retry layer here.
pub trait Prompter {
    /// Free-text question, with an optional help line.
    fn input(&mut self, message: &str, help: Option<&str>) -> Result<String>;

    /// Single-choice question over `options`; returns the chosen index.
    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize>;

    /// Yes/no question, defaulting to yes.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}
