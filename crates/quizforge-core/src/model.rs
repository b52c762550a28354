//! Core data model types for quizforge.
//!
//! These are the fundamental types the rest of the workspace uses to
//! represent questions, answer letters, categories, and answered results.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A single multiple-choice question from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text. Also used as the display key in results.
    #[serde(rename = "question")]
    pub text: String,
    /// Which category (and therefore scoring track) this question belongs to.
    pub category: Category,
    /// The four options, lettered A-D by position.
    pub options: [String; 4],
    /// The canonical answer. Must equal the text of one option.
    pub answer: String,
    /// Weight used by the weighted scoring track.
    #[serde(default = "default_difficulty")]
    pub difficulty: NonZeroU32,
}

fn default_difficulty() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl Question {
    /// Options paired with their letters, in display order.
    pub fn lettered_options(&self) -> impl Iterator<Item = (Letter, &str)> {
        Letter::ALL
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}

/// Category tag partitioning the question bank.
///
/// Serialized as the bare category name. Unknown names are kept as `Other`
/// so a bank with extra categories still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Cognitive,
    Skills,
    Other(String),
}

impl Category {
    /// The scoring track applied to this category, if any.
    pub fn track(&self) -> Option<Track> {
        match self {
            Category::Cognitive => Some(Track::Unweighted),
            Category::Skills => Some(Track::Weighted),
            Category::Other(_) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Cognitive => write!(f, "Cognitive"),
            Category::Skills => write!(f, "Skills"),
            Category::Other(name) => write!(f, "{name}"),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "cognitive" => Category::Cognitive,
            "skills" => Category::Skills,
            _ => Category::Other(s),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.to_string()
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("category name is empty".to_string());
        }
        Ok(Category::from(trimmed.to_string()))
    }
}

/// One of the two parallel analysis pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Count of correct answers (cognitive questions).
    Unweighted,
    /// Sum of difficulties of correct answers (skills questions).
    Weighted,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Unweighted => write!(f, "unweighted"),
            Track::Weighted => write!(f, "weighted"),
        }
    }
}

/// An answer letter. Letters are assigned by 1-based option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// Map a 1-based option position to its letter.
    pub fn from_position(position: usize) -> Option<Letter> {
        position
            .checked_sub(1)
            .and_then(|idx| Letter::ALL.get(idx))
            .copied()
    }

    /// The 1-based option position of this letter.
    pub fn position(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
        };
        write!(f, "{c}")
    }
}

/// Parses a single answer letter, case-insensitively.
///
/// Only the line ending is stripped; `" a "` is not a valid choice.
impl FromStr for Letter {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim_end_matches(|c: char| c == '\r' || c == '\n');
        match input.to_uppercase().as_str() {
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            _ => Err(QuizError::InvalidLetter(input.to_string())),
        }
    }
}

/// A respondent's answer to one question, already checked for correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredResult {
    /// The question text.
    pub question: String,
    /// The letter the respondent picked.
    pub user_answer: Letter,
    /// The canonical answer text.
    pub correct_answer: String,
    /// Whether `user_answer` matched the canonical answer.
    pub is_correct: bool,
    /// Difficulty of the question.
    pub difficulty: u32,
}
