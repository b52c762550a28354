//! quizforge-core — Question bank, scoring, feedback, and analysis.
//!
//! This crate defines the data model, the scoring pipeline, and the session
//! orchestrator that the rest of quizforge builds on.

pub mod analysis;
pub mod bank;
pub mod config;
pub mod error;
pub mod feedback;
pub mod model;
pub mod presenter;
pub mod report;
pub mod scoring;
pub mod session;
pub mod traits;

pub use bank::QuestionBank;
pub use error::QuizError;
pub use model::{AnsweredResult, Category, Letter, Question, Track};
pub use report::{QuizReport, TrackReport};
pub use session::{QuizSession, SamplePlan};
