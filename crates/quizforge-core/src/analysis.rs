//! Strengths/weaknesses analysis of answered results.

use serde::{Deserialize, Serialize};

use crate::model::{AnsweredResult, Track};
use crate::scoring::{total_units, unweighted_score, weighted_score};

/// Summary of one track's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Count of wrong answers. Not difficulty-weighted, even on the weighted track.
    pub incorrect_answers: u32,
    /// Summed difficulty of all attempted questions (weighted track only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_units: Option<u64>,
    /// Summed difficulty of correctly answered questions (weighted track only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
    /// Texts of correctly answered questions, in answer order.
    pub strengths: Vec<String>,
    /// Texts of incorrectly answered questions, in answer order.
    pub weaknesses: Vec<String>,
}

/// Analyze results on the unweighted track.
pub fn analyze_unweighted(results: &[AnsweredResult]) -> Analysis {
    let total_questions = results.len() as u32;
    let correct_answers = unweighted_score(results);
    let (strengths, weaknesses) = partition_questions(results);

    Analysis {
        total_questions,
        correct_answers,
        incorrect_answers: total_questions - correct_answers,
        total_units: None,
        score: None,
        strengths,
        weaknesses,
    }
}

/// Analyze results on the weighted track.
pub fn analyze_weighted(results: &[AnsweredResult]) -> Analysis {
    Analysis {
        total_units: Some(total_units(results)),
        score: Some(weighted_score(results)),
        ..analyze_unweighted(results)
    }
}

/// Analyze results with the pipeline belonging to `track`.
pub fn analyze(results: &[AnsweredResult], track: Track) -> Analysis {
    match track {
        Track::Unweighted => analyze_unweighted(results),
        Track::Weighted => analyze_weighted(results),
    }
}

fn partition_questions(results: &[AnsweredResult]) -> (Vec<String>, Vec<String>) {
    let (correct, wrong): (Vec<&AnsweredResult>, Vec<&AnsweredResult>) =
        results.iter().partition(|r| r.is_correct);
    let texts = |rs: Vec<&AnsweredResult>| -> Vec<String> {
        rs.into_iter().map(|r| r.question.clone()).collect()
    };
    (texts(correct), texts(wrong))
}
