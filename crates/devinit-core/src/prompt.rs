//! Prompt service seam
//!
//! The interactive surface lives in the binary crate; the core only
//! depends on this trait so orchestration tests can script answers.

use crate::error::Result;

/// A yes/no question put to the operator.
#[derive(Debug, Clone, Copy)]
pub struct YesNoQuestion {
    /// Stable key identifying the answer (e.g. `lint`).
    pub key: &'static str,
    pub message: &'static str,
    pub initial: bool,
}

/// Which optional features the operator enabled. Collected once,
/// immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSelection {
    pub lint: bool,
    pub git_hooks: bool,
}

/// Asks questions in order and returns the answers in the same order.
pub trait PromptService {
    /// `Err(Error::Cancelled)` when the operator backs out.
    fn ask(&self, questions: &[YesNoQuestion]) -> Result<Vec<bool>>;
}
