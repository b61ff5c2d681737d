//! Terminal implementations of the [`Prompter`] port.

use std::io::IsTerminal as _;
use std::sync::Arc;

use skatekit_adapters::DefaultsPrompter;
use skatekit_core::{
    application::{
        ApplicationError,
        ports::{Prompter, Question},
    },
    error::SkatekitResult,
};

/// Pick a prompter for this run.
///
/// `--yes` and a non-interactive stdin both mean "take the defaults".
pub fn select(accept_defaults: bool) -> Arc<dyn Prompter> {
    if accept_defaults || !std::io::stdin().is_terminal() {
        tracing::debug!("Prompts answered with defaults");
        return Arc::new(DefaultsPrompter);
    }
    Arc::new(TerminalPrompter)
}

/// Asks on the terminal. An empty answer takes the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn ask(&self, question: &Question) -> SkatekitResult<Option<String>> {
        use dialoguer::{Input, theme::ColorfulTheme};

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(question.message.as_str())
            .allow_empty(true);
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }

        let answer = input
            .interact_text()
            .map_err(|e| ApplicationError::PromptFailed {
                reason: e.to_string(),
            })?;
        Ok(resolve_answer(&answer, question))
    }
}

#[cfg(not(feature = "interactive"))]
impl Prompter for TerminalPrompter {
    fn ask(&self, question: &Question) -> SkatekitResult<Option<String>> {
        use std::io::{BufRead as _, Write as _};

        let prompt_failed = |e: std::io::Error| ApplicationError::PromptFailed {
            reason: e.to_string(),
        };

        let mut stderr = std::io::stderr();
        match &question.default {
            Some(default) => write!(stderr, "? {} ({default}) ", question.message),
            None => write!(stderr, "? {} ", question.message),
        }
        .and_then(|()| stderr.flush())
        .map_err(prompt_failed)?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(prompt_failed)?;
        Ok(resolve_answer(&line, question))
    }
}

/// Trimmed answer, the default when blank, `None` when neither exists.
fn resolve_answer(raw: &str, question: &Question) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        question.default.clone()
    } else {
        Some(trimmed.to_string())
    }
}
