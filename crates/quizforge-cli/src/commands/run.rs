//! The `quizforge run` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::presenter::{AnswerSheet, ConsoleAnswers};
use quizforge_core::report::{JsonPersister, QuizReport, TrackReport};
use quizforge_core::session::{session_rng, QuizSession, SamplePlan};
use quizforge_report::html::write_html_report;

pub struct RunArgs {
    pub bank: Option<PathBuf>,
    pub cognitive: Option<usize>,
    pub skills: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub html: bool,
    pub markdown: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let (config, bank) = super::load_bank(args.bank, args.config)?;

    let plan = SamplePlan {
        cognitive: args.cognitive.unwrap_or(config.samples.cognitive),
        skills: args.skills.unwrap_or(config.samples.skills),
    };
    anyhow::ensure!(
        plan.cognitive + plan.skills > 0,
        "nothing to ask: both --cognitive and --skills are 0"
    );
    let output = args.output.unwrap_or(config.output_dir);
    let mut rng = session_rng(args.seed.or(config.seed));

    println!(
        "quizforge v{}: {} cognitive + {} skills question(s)\n",
        env!("CARGO_PKG_VERSION"),
        plan.cognitive,
        plan.skills
    );

    let session = QuizSession::new(&bank);
    let mut presenter = AnswerSheet::new(
        ConsoleAnswers::new(io::stdin().lock(), io::stdout()),
        io::stdout(),
    );
    let persister = JsonPersister::new(&output);

    let outcome = session.run_and_save(&plan, &mut presenter, &persister, &mut rng)?;
    let report = &outcome.report;

    print_results(report);
    print_summary(report);

    let json_path = outcome
        .saved
        .context("results were computed but could not be saved")?;
    eprintln!("Results saved to: {}", json_path.display());

    if args.html {
        let html_path = json_path.with_extension("html");
        write_html_report(report, &html_path)?;
        eprintln!("HTML report: {}", html_path.display());
    }

    if args.markdown {
        let md_path = json_path.with_extension("md");
        std::fs::write(&md_path, report.to_markdown())
            .with_context(|| format!("failed to write {}", md_path.display()))?;
        eprintln!("Markdown summary: {}", md_path.display());
    }

    Ok(())
}

fn print_results(report: &QuizReport) {
    println!(
        "Your cognitive score is: {}/{}",
        report.cognitive.score, report.cognitive.total_possible
    );
    println!(
        "Your skills score is: {}/{}",
        report.skills.score, report.skills.total_possible
    );

    println!("\nCognitive Feedback:");
    println!("{}", report.cognitive.feedback);
    println!("\nSkills Feedback:");
    println!("{}", report.skills.feedback);

    println!("\nCognitive Analysis:");
    print_analysis(&report.cognitive);
    println!("\nSkills Analysis:");
    print_analysis(&report.skills);
}

fn print_analysis(track: &TrackReport) {
    let analysis = &track.analysis;
    println!("Total Questions: {}", analysis.total_questions);
    if let (Some(units), Some(score)) = (analysis.total_units, analysis.score) {
        println!("Total Units: {units}");
        println!("Score: {score}");
    } else {
        println!("Correct Answers: {}", analysis.correct_answers);
    }
    println!("Incorrect Answers: {}", analysis.incorrect_answers);
    println!("Strengths: {}", join_or_none(&analysis.strengths));
    println!("Weaknesses: {}", join_or_none(&analysis.weaknesses));
}

fn join_or_none(questions: &[String]) -> String {
    if questions.is_empty() {
        "None".to_string()
    } else {
        questions.join(", ")
    }
}

fn print_summary(report: &QuizReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Track", "Score", "Percentage", "Correct", "Incorrect"]);

    for (name, track) in [("Cognitive", &report.cognitive), ("Skills", &report.skills)] {
        let percentage = track
            .percentage()
            .map(|p| format!("{p:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(format!("{name} ({})", track.track)),
            Cell::new(format!("{}/{}", track.score, track.total_possible)),
            Cell::new(percentage),
            Cell::new(track.analysis.correct_answers),
            Cell::new(track.analysis.incorrect_answers),
        ]);
    }

    eprintln!("\n{table}");
}
