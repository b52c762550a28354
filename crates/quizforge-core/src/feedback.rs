//! Percentage-banded feedback text.
//!
//! | Percentage | Band |
//! |------------|------|
//! | 100 | Excellent |
//! | [75, 100) | Great |
//! | [50, 75) | Good |
//! | below 50 | NeedsReview |
//!
//! Each track has its own message set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::Track;

/// Shown in place of feedback when a track had no questions.
pub const NO_QUESTIONS_FEEDBACK: &str = "No questions attempted.";

/// One of the four fixed feedback bands, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackBand {
    NeedsReview,
    Good,
    Great,
    Excellent,
}

impl FeedbackBand {
    /// Pick the band for a percentage in `[0, 100]`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            FeedbackBand::Excellent
        } else if percentage >= 75.0 {
            FeedbackBand::Great
        } else if percentage >= 50.0 {
            FeedbackBand::Good
        } else {
            FeedbackBand::NeedsReview
        }
    }

    /// The message for this band on the given track.
    pub fn message(self, track: Track) -> &'static str {
        match (track, self) {
            (Track::Unweighted, FeedbackBand::Excellent) => {
                "Excellent job! You got all the answers correct. Keep up the great work!"
            }
            (Track::Unweighted, FeedbackBand::Great) => {
                "Great job! You have a strong understanding of the material. Consider reviewing areas where you struggled."
            }
            (Track::Unweighted, FeedbackBand::Good) => {
                "Good effort! You have a decent grasp, but there's room for improvement. Focus on the questions you missed."
            }
            (Track::Unweighted, FeedbackBand::NeedsReview) => {
                "It seems you may need to review the material further. Don't be discouraged, practice will help you improve!"
            }
            (Track::Weighted, FeedbackBand::Excellent) => {
                "Outstanding work! You demonstrated excellent skills."
            }
            (Track::Weighted, FeedbackBand::Great) => {
                "Great skills! You're well on your way to mastery."
            }
            (Track::Weighted, FeedbackBand::Good) => {
                "Good effort! Focus on the areas where you struggled."
            }
            (Track::Weighted, FeedbackBand::NeedsReview) => {
                "Consider reviewing the material to improve your skills."
            }
        }
    }
}

impl fmt::Display for FeedbackBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackBand::NeedsReview => write!(f, "needs review"),
            FeedbackBand::Good => write!(f, "good"),
            FeedbackBand::Great => write!(f, "great"),
            FeedbackBand::Excellent => write!(f, "excellent"),
        }
    }
}

/// `100 * score / total_possible`.
pub fn percentage(score: u64, total_possible: u64) -> Result<f64, QuizError> {
    if total_possible == 0 {
        return Err(QuizError::NoQuestionsAttempted);
    }
    Ok(100.0 * score as f64 / total_possible as f64)
}

/// The band a score falls in.
pub fn band(score: u64, total_possible: u64) -> Result<FeedbackBand, QuizError> {
    percentage(score, total_possible).map(FeedbackBand::from_percentage)
}

/// Feedback text for a score on a track.
///
/// For the unweighted track `total_possible` is the question count; for the
/// weighted track it is the summed difficulty of the attempted questions.
pub fn feedback(score: u64, total_possible: u64, track: Track) -> Result<&'static str, QuizError> {
    Ok(band(score, total_possible)?.message(track))
}
