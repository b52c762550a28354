//! The `quizforge init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_unless_exists(Path::new("quizforge.toml"), SAMPLE_CONFIG)?;
    write_unless_exists(Path::new("questions.json"), SAMPLE_BANK)?;

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.json");
    println!("  2. Run: quizforge questions");
    println!("  3. Run: quizforge run");

    Ok(())
}

fn write_unless_exists(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_BANK: &str = include_str!("../../assets/questions.json");

const SAMPLE_CONFIG: &str = r#"# quizforge configuration

bank_path = "questions.json"
output_dir = "./quizforge-results"
# seed = 42

[samples]
cognitive = 2
skills = 2

[server]
host = "127.0.0.1"
port = 5000
"#;
