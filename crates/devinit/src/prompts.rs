//! cliclack-backed prompt service (Charm-style inline prompts)

use devinit_core::{Error, PromptService, Result, YesNoQuestion};

/// Asks each question as a yes/no confirm, in order. Any interaction
/// failure (including Ctrl+C / Esc) is reported as cancellation.
pub struct CliclackPrompts;

impl PromptService for CliclackPrompts {
    fn ask(&self, questions: &[YesNoQuestion]) -> Result<Vec<bool>> {
        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            let answer = cliclack::confirm(question.message)
                .initial_value(question.initial)
                .interact()
                .map_err(|_| Error::Cancelled)?;
            answers.push(answer);
        }
        Ok(answers)
    }
}
