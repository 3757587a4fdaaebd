//! Interactive prompting.
//!
//! The menu talks to the user only through [`Prompt`], so a session can be
//! driven by a script in tests.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// Source of user answers.
pub trait Prompt {
    /// Pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Free text. An empty answer yields `default` when one is given.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selection)
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
