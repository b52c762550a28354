//! Quiz report types with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{analyze, Analysis};
use crate::error::QuizError;
use crate::feedback::{feedback, NO_QUESTIONS_FEEDBACK};
use crate::model::{AnsweredResult, Track};
use crate::scoring::{total_units, unweighted_score, weighted_score};
use crate::traits::Persister;

/// A complete quiz report for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was compiled.
    pub created_at: DateTime<Utc>,
    /// Cognitive questions, scored on the unweighted track.
    pub cognitive: TrackReport,
    /// Skills questions, scored on the weighted track.
    pub skills: TrackReport,
}

/// Score, feedback, and analysis for one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackReport {
    pub track: Track,
    /// Correct count (unweighted) or summed difficulty of correct answers (weighted).
    pub score: u64,
    /// Question count (unweighted) or summed difficulty (weighted).
    pub total_possible: u64,
    pub feedback: String,
    pub analysis: Analysis,
    pub detailed_results: Vec<AnsweredResult>,
}

impl TrackReport {
    /// Score, analyze, and write feedback for a track's results.
    ///
    /// An empty track gets the neutral "no questions" text instead of
    /// feedback, since there is no percentage to band.
    pub fn compile(track: Track, results: Vec<AnsweredResult>) -> Result<Self, QuizError> {
        let (score, total_possible) = match track {
            Track::Unweighted => (u64::from(unweighted_score(&results)), results.len() as u64),
            Track::Weighted => (weighted_score(&results), total_units(&results)),
        };

        let feedback = if results.is_empty() {
            NO_QUESTIONS_FEEDBACK.to_string()
        } else {
            feedback(score, total_possible, track)?.to_string()
        };

        Ok(Self {
            track,
            score,
            total_possible,
            feedback,
            analysis: analyze(&results, track),
            detailed_results: results,
        })
    }

    /// Score as a percentage, or `None` for an empty track.
    pub fn percentage(&self) -> Option<f64> {
        crate::feedback::percentage(self.score, self.total_possible).ok()
    }
}

impl QuizReport {
    /// Compile a report from both tracks' results.
    pub fn compile(
        cognitive: Vec<AnsweredResult>,
        skills: Vec<AnsweredResult>,
    ) -> Result<Self, QuizError> {
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            cognitive: TrackReport::compile(Track::Unweighted, cognitive)?,
            skills: TrackReport::compile(Track::Weighted, skills)?,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        for (title, track) in [("Cognitive", &self.cognitive), ("Skills", &self.skills)] {
            md.push_str(&format!("### {title}\n\n"));
            md.push_str(&format!(
                "**Score:** {}/{}\n\n{}\n\n",
                track.score, track.total_possible, track.feedback
            ));
            md.push_str("| Question | Answer | Correct | Difficulty |\n");
            md.push_str("|----------|--------|---------|------------|\n");
            for r in &track.detailed_results {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    r.question,
                    r.user_answer,
                    if r.is_correct { "yes" } else { "no" },
                    r.difficulty
                ));
            }
            md.push('\n');
        }

        md
    }
}

/// Writes reports as pretty JSON into a directory.
#[derive(Debug, Clone)]
pub struct JsonPersister {
    output_dir: PathBuf,
}

impl JsonPersister {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path a report will be written to.
    ///
    /// The id prefix keeps sessions finishing in the same second apart.
    pub fn path_for(&self, report: &QuizReport) -> PathBuf {
        let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
        let id = report.id.simple().to_string();
        self.output_dir
            .join(format!("results-{timestamp}-{}.json", &id[..8]))
    }
}

impl Persister for JsonPersister {
    fn save(&self, report: &QuizReport) -> Result<PathBuf> {
        let path = self.path_for(report);
        report.save_json(&path)?;
        tracing::info!("report {} saved to {}", report.id, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Letter;

    fn result(question: &str, is_correct: bool, difficulty: u32) -> AnsweredResult {
        AnsweredResult {
            question: question.into(),
            user_answer: if is_correct { Letter::A } else { Letter::B },
            correct_answer: "alpha".into(),
            is_correct,
            difficulty,
        }
    }

    fn sample_report() -> QuizReport {
        QuizReport::compile(
            vec![
                result("c1", true, 1),
                result("c2", false, 1),
                result("c3", true, 2),
            ],
            vec![
                result("s1", true, 1),
                result("s2", false, 1),
                result("s3", true, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn worked_example_bands() {
        let report = sample_report();

        assert_eq!(report.cognitive.score, 2);
        assert_eq!(report.cognitive.total_possible, 3);
        assert!(report.cognitive.feedback.starts_with("Good effort!"));

        assert_eq!(report.skills.score, 3);
        assert_eq!(report.skills.total_possible, 4);
        assert_eq!(report.skills.analysis.total_units, Some(4));
        assert_eq!(report.skills.percentage(), Some(75.0));
        assert!(report.skills.feedback.starts_with("Great skills!"));
    }

    #[test]
    fn empty_track_gets_neutral_feedback() {
        let report = QuizReport::compile(vec![], vec![result("s1", true, 2)]).unwrap();
        assert_eq!(report.cognitive.feedback, NO_QUESTIONS_FEEDBACK);
        assert_eq!(report.cognitive.analysis.total_questions, 0);
        assert_eq!(report.cognitive.percentage(), None);
        assert!(report.skills.feedback.starts_with("Outstanding work!"));
    }

    #[test]
    fn json_roundtrip_preserves_everything() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = QuizReport::load_json(&path).unwrap();

        assert_eq!(loaded, report);
        assert_eq!(loaded.cognitive.analysis.strengths, vec!["c1", "c3"]);
        assert_eq!(loaded.skills.analysis.weaknesses, vec!["s2"]);
    }

    #[test]
    fn persister_writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let persister = JsonPersister::new(dir.path());
        let report = sample_report();

        let path = persister.save(&report).unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("results-"));
        assert_eq!(QuizReport::load_json(&path).unwrap().id, report.id);
    }

    #[test]
    fn same_second_reports_get_distinct_paths() {
        let persister = JsonPersister::new("out");
        let first = sample_report();
        let mut second = sample_report();
        second.created_at = first.created_at;

        assert_ne!(persister.path_for(&first), persister.path_for(&second));
    }

    #[test]
    fn huge_difficulties_do_not_overflow() {
        let report = QuizReport::compile(
            vec![],
            vec![
                result("s1", true, 3_000_000_000),
                result("s2", true, 3_000_000_000),
            ],
        )
        .unwrap();

        assert_eq!(report.skills.score, 6_000_000_000);
        assert_eq!(report.skills.total_possible, 6_000_000_000);
        assert_eq!(report.skills.analysis.total_units, Some(6_000_000_000));
        assert!(report.skills.feedback.starts_with("Outstanding work!"));
    }

    #[test]
    fn load_missing_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(QuizReport::load_json(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn markdown_output() {
        let md = sample_report().to_markdown();
        assert!(md.contains("### Cognitive"));
        assert!(md.contains("**Score:** 3/4"));
        assert!(md.contains("| c2 | B | no | 1 |"));
    }
}
