//! readme-index CLI
//!
//! Writes a Markdown index of a directory tree. Run with no arguments to
//! index the current directory into `README.md`.

use clap::Parser;
use colored::Colorize;
use readme_index_core::{IndexConfig, DEFAULT_README_PATH, DEFAULT_ROOT_DIR};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "readme-index")]
#[command(author = "readme-index Contributors")]
#[command(version)]
#[command(about = "Generate a Markdown index of a directory tree", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Directory to index
    #[arg(default_value = DEFAULT_ROOT_DIR)]
    root: PathBuf,

    /// File to write the index to
    #[arg(short, long, default_value = DEFAULT_README_PATH)]
    output: PathBuf,
}

impl Cli {
    fn config(&self) -> IndexConfig {
        IndexConfig::new(&self.root, &self.output)
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr, stdout is for the summary line
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = commands::generate(&cli.config()) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
