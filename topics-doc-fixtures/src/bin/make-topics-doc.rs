//! make-topics-doc
//!
//! Regenerates the reStructuredText list of message topics from a directory
//! of fixture files.

use clap::Parser;
use std::path::PathBuf;
use topics_doc_fixtures::{build_document, load_config};

#[derive(Parser)]
#[command(name = "make-topics-doc")]
#[command(author, version, about = "Generate the list of message topics from fixtures", long_about = None)]
struct Cli {
    /// Directory searched recursively for `*.json` fixture files
    fixtures_dir: PathBuf,

    /// Directory the document is written into
    output_dir: PathBuf,

    /// TOML configuration file (defaults apply when absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use sequential substitution tokens so output is reproducible
    #[arg(long)]
    seed_tokens: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let written = build_document(&cli.fixtures_dir, &cli.output_dir, &config, cli.seed_tokens)?;
    println!(
        "Wrote {} topics in {} sections to {}",
        written.report.topics,
        written.report.sections,
        written.path.display()
    );
    Ok(())
}
