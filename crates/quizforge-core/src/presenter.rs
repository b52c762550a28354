//! Text presenter and answer sources.
//!
//! `AnswerSheet` renders each question, asks an `AnswerSource` for the
//! respondent's letter, and reports whether it was right. `ConsoleAnswers`
//! reads letters from a line-based reader and re-prompts until it gets a
//! valid one. `ScriptedAnswers` replays a fixed list for tests and demos.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::QuizError;
use crate::model::{AnsweredResult, Letter, Question};
use crate::scoring::answer_question;
use crate::traits::{AnswerSource, Presenter};

/// Presents questions as plain text and scores each answer as it comes in.
pub struct AnswerSheet<S, W> {
    source: S,
    out: W,
}

impl<S: AnswerSource, W: Write> AnswerSheet<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    /// Consume the sheet and return its parts.
    pub fn into_inner(self) -> (S, W) {
        (self.source, self.out)
    }
}

impl<S: AnswerSource, W: Write> Presenter for AnswerSheet<S, W> {
    fn present(&mut self, questions: &[&Question]) -> Result<Vec<AnsweredResult>, QuizError> {
        let mut results = Vec::with_capacity(questions.len());

        for (idx, question) in questions.iter().enumerate() {
            let number = idx + 1;
            writeln!(self.out, "Question {number}: {}", question.text)?;
            for (letter, option) in question.lettered_options() {
                writeln!(self.out, "{letter}. {option}")?;
            }
            self.out.flush()?;

            let letter = self.source.next_answer(number, question)?;
            let result = answer_question(question, letter)?;

            if result.is_correct {
                writeln!(self.out, "Correct!\n")?;
            } else {
                writeln!(
                    self.out,
                    "Wrong! The correct answer was {}\n",
                    result.correct_answer
                )?;
            }
            results.push(result);
        }

        Ok(results)
    }
}

/// Reads answers line by line, re-prompting on anything that isn't A-D.
pub struct ConsoleAnswers<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ConsoleAnswers<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsoleAnswers<R, W> {
    fn next_answer(&mut self, _number: usize, _question: &Question) -> Result<Letter, QuizError> {
        write!(self.prompt_out, "Your answer (A/B/C/D): ")?;
        loop {
            self.prompt_out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(QuizError::Input(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input closed before an answer was given",
                )));
            }

            match line.parse::<Letter>() {
                Ok(letter) => return Ok(letter),
                Err(e) => {
                    tracing::debug!("{e}");
                    write!(self.prompt_out, "Invalid choice. Please enter A, B, C, or D: ")?;
                }
            }
        }
    }
}

/// Replays a scripted list of raw answers.
///
/// Entries that don't parse as a letter are skipped, the same way the
/// console re-prompts after an invalid choice.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    rejected: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            rejected: Vec::new(),
        }
    }

    /// Answer every question correctly, in order.
    pub fn correct_for(questions: &[&Question]) -> Result<Self, QuizError> {
        let letters = questions
            .iter()
            .map(|q| q.correct_letter().map(|l| l.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(letters))
    }

    /// Entries skipped because they were not valid letters.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self, number: usize, _question: &Question) -> Result<Letter, QuizError> {
        while let Some(raw) = self.answers.pop_front() {
            match raw.parse::<Letter>() {
                Ok(letter) => return Ok(letter),
                Err(_) => self.rejected.push(raw),
            }
        }
        Err(QuizError::AnswersExhausted(number))
    }
}
