//! The `quizforge questions` command.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use comfy_table::Table;

use quizforge_core::{Category, Question, QuizError};

pub fn execute(
    bank: Option<PathBuf>,
    category: Option<String>,
    json: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let (_, bank) = super::load_bank(bank, config)?;

    let questions: Vec<&Question> = match category {
        Some(name) => {
            let category: Category = name.parse().map_err(|e: String| anyhow!(e))?;
            let filtered = bank.by_category(&category);
            if filtered.is_empty() {
                return Err(QuizError::CategoryNotFound(category).into());
            }
            filtered
        }
        None => bank.questions().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Category", "Question", "Answer", "Difficulty"]);
    for (i, q) in questions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            q.category.to_string(),
            q.text.clone(),
            q.answer.clone(),
            q.difficulty.to_string(),
        ]);
    }
    println!("{table}");

    let categories: Vec<String> = bank.categories().iter().map(|c| c.to_string()).collect();
    println!(
        "\n{} question(s) shown; bank categories: {}",
        questions.len(),
        categories.join(", ")
    );

    Ok(())
}
