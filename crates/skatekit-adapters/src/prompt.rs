//! Non-interactive prompters.
//!
//! The terminal prompter lives in the CLI; these cover `--yes` runs and
//! tests.

use std::collections::HashMap;
use std::sync::Mutex;

use skatekit_core::{
    application::ports::{Prompter, Question},
    error::{SkatekitError, SkatekitResult},
};

/// Accepts every default without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&self, question: &Question) -> SkatekitResult<Option<String>> {
        Ok(question.default.clone())
    }
}

/// Answers from a fixed script keyed by [`Question::key`].
///
/// Unscripted questions get their default. Every question asked is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<&'static str, String>,
    asked: Mutex<Vec<Question>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.answers.insert(key, value.into());
        self
    }

    /// Keys of the questions asked so far, in order.
    pub fn asked(&self) -> Vec<&'static str> {
        self.asked
            .lock()
            .map(|asked| asked.iter().map(|q| q.key).collect())
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &Question) -> SkatekitResult<Option<String>> {
        self.asked
            .lock()
            .map_err(|_| SkatekitError::Internal {
                message: "prompt log lock poisoned".into(),
            })?
            .push(question.clone());

        Ok(self
            .answers
            .get(question.key)
            .cloned()
            .or_else(|| question.default.clone()))
    }
}
