//! twinpath CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod wizard;

#[derive(Parser)]
#[command(name = "twinpath", version, about = "Digital Twin career-readiness assessment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively
    Run {
        /// Path to a .toml question bank (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output directory for report files
        #[arg(long, default_value = "./twinpath-results")]
        output: PathBuf,

        /// Output format: json, html, markdown, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Score a saved answers JSON file without the interactive wizard
    Score {
        /// Path to an answers JSON file (question id -> value)
        #[arg(long)]
        answers: PathBuf,

        /// Path to a .toml question bank (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Output directory for report files
        #[arg(long, default_value = "./twinpath-results")]
        output: PathBuf,

        /// Output format: json, html, markdown, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// List the questions in a bank
    Questions {
        /// Path to a .toml question bank (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Filter by category (psychometric, technical, aptitude, domain)
        #[arg(long)]
        category: Option<String>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Render a saved report JSON
    Report {
        /// Path to a report JSON file
        #[arg(long)]
        input: PathBuf,

        /// Output format: text, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to this file instead of stdout (html always needs it)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter custom bank and sample answers file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("twinpath=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            bank,
            output,
            format,
        } => commands::run::execute(bank, output, format),
        Commands::Score {
            answers,
            bank,
            output,
            format,
        } => commands::score::execute(answers, bank, output, format),
        Commands::Questions { bank, category } => commands::questions::execute(bank, category),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Report {
            input,
            format,
            output,
        } => commands::report::execute(input, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
