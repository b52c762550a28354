//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Multiple-choice quiz engine with scoring and feedback")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an interactive quiz session
    Run {
        /// Path to the JSON question bank
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Number of cognitive questions to draw
        #[arg(long)]
        cognitive: Option<usize>,

        /// Number of skills questions to draw
        #[arg(long)]
        skills: Option<usize>,

        /// RNG seed for a reproducible question selection
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for results
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write an HTML report
        #[arg(long)]
        html: bool,

        /// Also write a markdown summary
        #[arg(long)]
        markdown: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List questions in the bank
    Questions {
        /// Path to the JSON question bank
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Only list this category (e.g. "Cognitive", "Skills")
        #[arg(long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Serve the question bank over HTTP
    Serve {
        /// Path to the JSON question bank
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long)]
        port: Option<u16>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            bank,
            cognitive,
            skills,
            seed,
            output,
            html,
            markdown,
            config,
        } => commands::run::execute(commands::run::RunArgs {
            bank,
            cognitive,
            skills,
            seed,
            output,
            html,
            markdown,
            config,
        }),
        Commands::Questions {
            bank,
            category,
            json,
            config,
        } => commands::questions::execute(bank, category, json, config),
        Commands::Serve {
            bank,
            host,
            port,
            config,
        } => commands::serve::execute(bank, host, port, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
