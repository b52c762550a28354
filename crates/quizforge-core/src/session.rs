//! Quiz session orchestrator.
//!
//! Samples questions per category, hands them to a presenter, and compiles
//! the scored report.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::error::QuizError;
use crate::model::{AnsweredResult, Category, Question};
use crate::report::QuizReport;
use crate::traits::{Persister, Presenter};

/// How many questions to draw from each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePlan {
    #[serde(default = "default_sample_size")]
    pub cognitive: usize,
    #[serde(default = "default_sample_size")]
    pub skills: usize,
}

fn default_sample_size() -> usize {
    2
}

impl Default for SamplePlan {
    fn default() -> Self {
        Self {
            cognitive: default_sample_size(),
            skills: default_sample_size(),
        }
    }
}

/// Result of a session that also tried to persist its report.
///
/// A failed save never discards the report.
#[derive(Debug)]
pub struct SessionOutcome {
    pub report: QuizReport,
    /// Where the report was saved, or why it couldn't be.
    pub saved: anyhow::Result<std::path::PathBuf>,
}

/// One evaluation session over a shared, read-only bank.
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Questions in `category`, in bank order.
    pub fn questions_in(&self, category: &Category) -> Vec<&'a Question> {
        self.bank.by_category(category)
    }

    /// Draw `count` distinct questions from `category`, uniformly at random.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        category: &Category,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<&'a Question>, QuizError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let pool = self.questions_in(category);
        if pool.is_empty() {
            return Err(QuizError::CategoryNotFound(category.clone()));
        }
        if pool.len() < count {
            return Err(QuizError::InsufficientQuestions {
                category: category.clone(),
                requested: count,
                available: pool.len(),
            });
        }

        tracing::debug!(
            "sampling {count} of {} question(s) from {category}",
            pool.len()
        );
        Ok(pool.choose_multiple(rng, count).copied().collect())
    }

    /// Run a full session: sample both categories, present them, and
    /// compile the report.
    ///
    /// Both samples are drawn before anything is presented, so a bank that
    /// can't satisfy the plan fails before the respondent sees a question.
    pub fn run<R: Rng + ?Sized>(
        &self,
        plan: &SamplePlan,
        presenter: &mut dyn Presenter,
        rng: &mut R,
    ) -> Result<QuizReport, QuizError> {
        let start = Instant::now();

        let cognitive = self.sample(&Category::Cognitive, plan.cognitive, rng)?;
        let skills = self.sample(&Category::Skills, plan.skills, rng)?;

        let cognitive_results = present_all(presenter, &cognitive)?;
        let skills_results = present_all(presenter, &skills)?;

        let report = QuizReport::compile(cognitive_results, skills_results)?;

        tracing::info!(
            "session {} complete in {}ms: cognitive {}/{}, skills {}/{}",
            report.id,
            start.elapsed().as_millis(),
            report.cognitive.score,
            report.cognitive.total_possible,
            report.skills.score,
            report.skills.total_possible,
        );
        Ok(report)
    }

    /// Run a session and hand the report to `persister`.
    pub fn run_and_save<R: Rng + ?Sized>(
        &self,
        plan: &SamplePlan,
        presenter: &mut dyn Presenter,
        persister: &dyn Persister,
        rng: &mut R,
    ) -> Result<SessionOutcome, QuizError> {
        let report = self.run(plan, presenter, rng)?;
        let saved = persister.save(&report);
        if let Err(e) = &saved {
            tracing::warn!("failed to save report {}: {e:#}", report.id);
        }
        Ok(SessionOutcome { report, saved })
    }
}

/// A random number generator, seeded when a seed is given.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn present_all(
    presenter: &mut dyn Presenter,
    questions: &[&Question],
) -> Result<Vec<AnsweredResult>, QuizError> {
    if questions.is_empty() {
        return Ok(Vec::new());
    }
    let results = presenter.present(questions)?;
    if results.len() != questions.len() {
        return Err(QuizError::PresenterMismatch {
            expected: questions.len(),
            returned: results.len(),
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZeroU32;
    use std::path::PathBuf;

    use super::*;
    use crate::feedback::NO_QUESTIONS_FEEDBACK;
    use crate::presenter::{AnswerSheet, ScriptedAnswers};
    use crate::scoring::answer_question;

    fn question(text: &str, category: Category, difficulty: u32) -> Question {
        Question {
            text: text.into(),
            category,
            options: ["a", "b", "c", "d"].map(String::from),
            answer: "a".into(),
            difficulty: NonZeroU32::new(difficulty).unwrap(),
        }
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            question("c1", Category::Cognitive, 1),
            question("c2", Category::Cognitive, 1),
            question("c3", Category::Cognitive, 2),
            question("s1", Category::Skills, 1),
            question("s2", Category::Skills, 3),
            question("s3", Category::Skills, 2),
            question("t1", Category::Other("Trivia".into()), 1),
        ])
    }

    /// Answers every question with a fixed letter, without any I/O.
    struct AlwaysAnswer(crate::model::Letter);

    impl Presenter for AlwaysAnswer {
        fn present(&mut self, questions: &[&Question]) -> Result<Vec<AnsweredResult>, QuizError> {
            questions.iter().map(|q| answer_question(q, self.0)).collect()
        }
    }

    /// Drops the last result to simulate a broken presenter.
    struct ShortPresenter;

    impl Presenter for ShortPresenter {
        fn present(&mut self, questions: &[&Question]) -> Result<Vec<AnsweredResult>, QuizError> {
            let mut results: Vec<_> = questions
                .iter()
                .map(|q| answer_question(q, crate::model::Letter::A))
                .collect::<Result<_, _>>()?;
            results.pop();
            Ok(results)
        }
    }

    struct FailingPersister;

    impl Persister for FailingPersister {
        fn save(&self, _: &QuizReport) -> anyhow::Result<PathBuf> {
            anyhow::bail!("disk full")
        }
    }

    #[test]
    fn sample_returns_distinct_questions() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        for seed in 0..20 {
            let mut rng = session_rng(Some(seed));
            let picked = session.sample(&Category::Cognitive, 3, &mut rng).unwrap();
            let texts: HashSet<_> = picked.iter().map(|q| q.text.as_str()).collect();
            assert_eq!(texts.len(), 3);
            assert!(picked.iter().all(|q| q.category == Category::Cognitive));
        }
    }

    #[test]
    fn sample_is_deterministic_for_a_seed() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let a = session
            .sample(&Category::Skills, 2, &mut session_rng(Some(7)))
            .unwrap();
        let b = session
            .sample(&Category::Skills, 2, &mut session_rng(Some(7)))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sample_more_than_available_fails() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let err = session
            .sample(&Category::Skills, 4, &mut session_rng(Some(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientQuestions {
                requested: 4,
                available: 3,
                ..
            }
        ));
    }

    #[test]
    fn sample_from_missing_category() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let missing = Category::Other("History".into());
        assert!(matches!(
            session.sample(&missing, 1, &mut session_rng(Some(1))),
            Err(QuizError::CategoryNotFound(_))
        ));
        assert!(session
            .sample(&missing, 0, &mut session_rng(Some(1)))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn run_scores_both_tracks() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let mut presenter = AlwaysAnswer(crate::model::Letter::A);

        let report = session
            .run(&SamplePlan::default(), &mut presenter, &mut session_rng(Some(3)))
            .unwrap();

        assert_eq!(report.cognitive.detailed_results.len(), 2);
        assert_eq!(report.skills.detailed_results.len(), 2);
        assert_eq!(report.cognitive.score, 2);
        assert_eq!(report.skills.score, report.skills.total_possible);
        assert!(report.cognitive.feedback.starts_with("Excellent job!"));
        assert!(report.skills.feedback.starts_with("Outstanding work!"));
        assert_eq!(report.skills.analysis.weaknesses.len(), 0);
    }

    #[test]
    fn run_with_all_wrong_answers() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let mut presenter = AlwaysAnswer(crate::model::Letter::D);
        let plan = SamplePlan {
            cognitive: 3,
            skills: 1,
        };

        let report = session
            .run(&plan, &mut presenter, &mut session_rng(Some(9)))
            .unwrap();
        assert_eq!(report.cognitive.score, 0);
        assert_eq!(report.cognitive.analysis.incorrect_answers, 3);
        assert!(report.cognitive.feedback.starts_with("It seems"));
        assert_eq!(report.skills.analysis.incorrect_answers, 1);
        assert!(report.skills.feedback.starts_with("Consider reviewing"));
    }

    #[test]
    fn run_with_empty_track() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let plan = SamplePlan {
            cognitive: 0,
            skills: 2,
        };
        let mut sheet = AnswerSheet::new(ScriptedAnswers::new(["A", "A"]), std::io::sink());

        let report = session
            .run(&plan, &mut sheet, &mut session_rng(Some(5)))
            .unwrap();
        assert_eq!(report.cognitive.feedback, NO_QUESTIONS_FEEDBACK);
        assert_eq!(report.cognitive.analysis.total_questions, 0);
        assert_eq!(report.skills.analysis.total_questions, 2);
    }

    #[test]
    fn run_fails_before_presenting_when_plan_unsatisfiable() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let plan = SamplePlan {
            cognitive: 1,
            skills: 10,
        };
        let mut sheet = AnswerSheet::new(ScriptedAnswers::new(["A"]), std::io::sink());

        let err = session
            .run(&plan, &mut sheet, &mut session_rng(Some(5)))
            .unwrap_err();
        assert!(matches!(err, QuizError::InsufficientQuestions { .. }));
        let (source, _) = sheet.into_inner();
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn run_rejects_presenter_mismatch() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let err = session
            .run(
                &SamplePlan::default(),
                &mut ShortPresenter,
                &mut session_rng(Some(2)),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::PresenterMismatch {
                expected: 2,
                returned: 1
            }
        ));
    }

    #[test]
    fn failed_save_keeps_report() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let mut presenter = AlwaysAnswer(crate::model::Letter::A);

        let outcome = session
            .run_and_save(
                &SamplePlan::default(),
                &mut presenter,
                &FailingPersister,
                &mut session_rng(Some(4)),
            )
            .unwrap();
        assert!(outcome.saved.is_err());
        assert_eq!(outcome.report.cognitive.score, 2);
    }

    #[test]
    fn successful_save_reports_path() {
        let bank = bank();
        let session = QuizSession::new(&bank);
        let dir = tempfile::tempdir().unwrap();
        let persister = crate::report::JsonPersister::new(dir.path());
        let mut presenter = AlwaysAnswer(crate::model::Letter::B);

        let outcome = session
            .run_and_save(
                &SamplePlan::default(),
                &mut presenter,
                &persister,
                &mut session_rng(Some(4)),
            )
            .unwrap();
        let path = outcome.saved.unwrap();
        assert!(path.exists());
    }
}
