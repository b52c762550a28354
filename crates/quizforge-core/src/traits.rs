//! Collaborator traits for presentation, answer input, and persistence.
//!
//! The scoring core never blocks or touches the filesystem itself; sessions
//! delegate those concerns to implementations of these traits.

use std::path::PathBuf;

use crate::error::QuizError;
use crate::model::{AnsweredResult, Letter, Question};
use crate::report::QuizReport;

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Shows questions to a respondent and collects their answers.
pub trait Presenter {
    /// Present `questions` in order. Must return exactly one result per
    /// question, in the same order.
    fn present(&mut self, questions: &[&Question]) -> Result<Vec<AnsweredResult>, QuizError>;
}

/// A blocking source of answer letters.
///
/// Implementations keep asking until they get a valid letter, so callers
/// only ever see `A`-`D` or an error.
pub trait AnswerSource {
    /// Obtain the answer for the `number`th (1-based) question of a round.
    fn next_answer(&mut self, number: usize, question: &Question) -> Result<Letter, QuizError>;
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Stores a finished report somewhere.
pub trait Persister {
    /// Save the report and return where it went.
    fn save(&self, report: &QuizReport) -> anyhow::Result<PathBuf>;
}
