pub mod init;
pub mod questions;
pub mod run;
pub mod serve;

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::config::{load_config_from, QuizConfig};
use quizforge_core::QuestionBank;

/// Load config, letting an explicit `--bank` win over the configured path.
fn load_bank(
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(QuizConfig, QuestionBank)> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(bank) = bank {
        config.bank_path = bank;
    }
    let bank = QuestionBank::load(&config.bank_path)?;
    Ok((config, bank))
}
