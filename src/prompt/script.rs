use std::collections::VecDeque;

use anyhow::{bail, Result};

use super::Prompter;

/// Plays back a fixed sequence of answers and records every prompt issued.
///
/// Answers are consumed strictly in order, so a script with the wrong kind
/// or count of answers fails loudly instead of hanging on a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Scripted>,
    transcript: Vec<String>,
}

#[derive(Debug)]
enum Scripted {
    Text(String),
    Pick(usize),
    Flag(bool),
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a free-text answer.
    pub fn text(mut self, answer: &str) -> Self {
        self.answers.push_back(Scripted::Text(answer.to_string()));
        self
    }

    /// Queue a selection answer (option index).
    pub fn pick(mut self, index: usize) -> Self {
        self.answers.push_back(Scripted::Pick(index));
        self
    }

    /// Queue a confirmation answer.
    pub fn flag(mut self, value: bool) -> Self {
        self.answers.push_back(Scripted::Flag(value));
        self
    }

    /// Every prompt issued so far, in order, prefixed by question kind.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, _help: Option<&str>) -> Result<String> {
        self.transcript.push(format!("input: {message}"));
        match self.answers.pop_front() {
            Some(Scripted::Text(answer)) => Ok(answer),
            Some(_) => bail!("scripted answer kind mismatch at '{message}'"),
            None => bail!("scripted answers exhausted at '{message}'"),
        }
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize> {
        self.transcript.push(format!("select: {message}"));
        match self.answers.pop_front() {
            Some(Scripted::Pick(index)) if index < options.len() => Ok(index),
            Some(Scripted::Pick(index)) => {
                bail!("scripted selection {index} out of range at '{message}'")
            }
            Some(_) => bail!("scripted answer kind mismatch at '{message}'"),
            None => bail!("scripted answers exhausted at '{message}'"),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.transcript.push(format!("confirm: {message}"));
        match self.answers.pop_front() {
            Some(Scripted::Flag(value)) => Ok(value),
            Some(_) => bail!("scripted answer kind mismatch at '{message}'"),
            None => bail!("scripted answers exhausted at '{message}'"),
        }
    }
}
