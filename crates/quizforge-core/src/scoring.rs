//! Answer validation and score aggregation.
//!
//! Unweighted scoring counts correct answers; weighted scoring sums the
//! difficulty of correct answers.

use crate::error::QuizError;
use crate::model::{AnsweredResult, Letter, Question};

impl Question {
    /// The letter of the canonical answer, derived from its 1-based option
    /// position. The first matching option wins.
    pub fn correct_letter(&self) -> Result<Letter, QuizError> {
        self.options
            .iter()
            .position(|option| option == &self.answer)
            .and_then(|idx| Letter::from_position(idx + 1))
            .ok_or_else(|| QuizError::InvalidQuestion {
                question: self.text.clone(),
                answer: self.answer.clone(),
            })
    }
}

/// Check a respondent's letter against a question's canonical answer.
pub fn validate_answer(question: &Question, user_answer: Letter) -> Result<bool, QuizError> {
    Ok(question.correct_letter()? == user_answer)
}

/// Validate an answer and record it as an `AnsweredResult`.
pub fn answer_question(question: &Question, user_answer: Letter) -> Result<AnsweredResult, QuizError> {
    let is_correct = validate_answer(question, user_answer)?;
    Ok(AnsweredResult {
        question: question.text.clone(),
        user_answer,
        correct_answer: question.answer.clone(),
        is_correct,
        difficulty: question.difficulty.get(),
    })
}

/// Number of correct answers.
pub fn unweighted_score(results: &[AnsweredResult]) -> u32 {
    results.iter().filter(|r| r.is_correct).count() as u32
}

/// Sum of difficulties over correct answers.
///
/// Summed as `u64` so a handful of large difficulties can't overflow.
pub fn weighted_score(results: &[AnsweredResult]) -> u64 {
    results
        .iter()
        .filter(|r| r.is_correct)
        .map(|r| u64::from(r.difficulty))
        .sum()
}

/// Sum of difficulties over all answers, correct or not.
pub fn total_units(results: &[AnsweredResult]) -> u64 {
    results.iter().map(|r| u64::from(r.difficulty)).sum()
}
