//! CLI command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use readme_index_core::IndexConfig;
use readme_index_walker::generate_with_config;
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Generate the index described by `config`.
pub fn generate(config: &IndexConfig) -> Result<()> {
    debug!("Using {:?}", config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Indexing {}...", config.root_dir.display()));

    let result = generate_with_config(config);
    spinner.finish_and_clear();
    let result = result?;

    println!(
        "{} Indexed {} files in {} directories ({}ms) → {}",
        "✓".green(),
        result.files.to_string().cyan(),
        result.directories.to_string().cyan(),
        result.duration_ms,
        config.output_path.display()
    );

    Ok(())
}
