//! quizforge-report — Human-readable renderings of quiz reports.

pub mod html;
