//! Quiz engine error types.
//!
//! Every failure of the core surfaces synchronously to the immediate caller
//! as a `QuizError`. None of them are transient, so nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Category;

/// Errors produced by the question bank, scoring pipeline, and sessions.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank source does not exist.
    #[error("question bank not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The question bank source could not be read.
    #[error("failed to read question bank {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The question bank source is malformed.
    #[error("failed to parse question bank {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// A question's answer is not one of its options.
    #[error("invalid question '{question}': answer '{answer}' is not one of its options")]
    InvalidQuestion { question: String, answer: String },

    /// Filtering the bank by category yielded no questions.
    #[error("no questions found in category '{0}'")]
    CategoryNotFound(Category),

    /// The category holds fewer questions than the requested sample.
    #[error("category '{category}' has {available} question(s), {requested} requested")]
    InsufficientQuestions {
        category: Category,
        requested: usize,
        available: usize,
    },

    /// Feedback was requested for a track with nothing to score against.
    #[error("no questions attempted: cannot compute a percentage of zero")]
    NoQuestionsAttempted,

    /// A presenter returned a different number of results than questions.
    #[error("presenter returned {returned} result(s) for {expected} question(s)")]
    PresenterMismatch { expected: usize, returned: usize },

    /// An answer letter could not be parsed.
    #[error("invalid choice '{0}': expected A, B, C, or D")]
    InvalidLetter(String),

    /// A scripted answer source ran out of answers.
    #[error("no more answers available for question {0}")]
    AnswersExhausted(usize),

    /// Reading an answer from the respondent failed.
    #[error("failed to read answer: {0}")]
    Input(#[from] std::io::Error),
}
