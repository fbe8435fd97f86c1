pub mod archive;
pub mod assemble;
pub mod contract;
pub mod fetch;
pub mod filter;
pub mod load_rules;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use assemble::{collect, CollectConfig};
use contract::CollectReport;
use fetch::HttpFetcher;
use filter::FilterRules;
use load_rules::load_rules;

/// CLI for repo-corpus: combine a repository's source files into one corpus file.
#[derive(Parser)]
#[clap(
    name = "repo-corpus",
    version,
    about = "Download a GitHub repository archive and combine its qualifying source files into a single text file"
)]
pub struct Cli {
    /// Repository URL, e.g. https://github.com/owner/repo
    pub repo_url: String,

    /// Branch or ref to download (default: try master, then main)
    #[clap(long)]
    pub branch: Option<String>,

    /// Output file (default: <repo>_code.txt in the current directory)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// YAML file overriding the built-in filter rules
    #[clap(long)]
    pub rules: Option<PathBuf>,

    /// Minimum number of substantive lines a file must have
    #[clap(long)]
    pub min_lines: Option<usize>,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<CollectReport> {
    let mut rules = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => FilterRules::default(),
    };
    if let Some(min_lines) = cli.min_lines {
        rules.min_line_count = min_lines;
    }

    let config = CollectConfig {
        repo_url: cli.repo_url,
        branch: cli.branch,
        output: cli.output,
    };

    tracing::info!(repo_url = %config.repo_url, "Collection starting");
    let fetcher = HttpFetcher::new();
    let report = collect(&fetcher, &config, &rules).await?;

    // Names the output file even when no entry qualified.
    println!(
        "Combined source code saved to {}",
        report.output_path.display()
    );
    Ok(report)
}
