//! Collection pipeline: fetch → walk → filter → write.
//!
//! Drives one collection run end to end: downloads the repository archive,
//! enumerates its entries, applies the filter rules to each, and appends
//! every qualifying file's decoded content to the output artifact under a
//! provenance header. Fail-fast: the first error aborts the run and leaves
//! any partially written output on disk.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::archive;
use crate::contract::{CollectReport, Fetcher};
use crate::fetch;
use crate::filter::FilterRules;

/// What to collect and where to put it.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Repository URL, optionally with a `/tree/...` subdirectory suffix.
    pub repo_url: String,
    /// Branch or ref to download. `None` enables branch discovery.
    pub branch: Option<String>,
    /// Output file override. `None` derives the name from the repository URL.
    pub output: Option<PathBuf>,
}

/// Derives the default output file name from the repository URL's last path
/// segment.
pub fn output_file_name(repo_url: &str) -> String {
    let last_segment = repo_url.rsplit('/').next().unwrap_or(repo_url);
    format!("{last_segment}_code.txt")
}

/// Header written before each qualifying file so the combined corpus keeps
/// per-file provenance.
fn entry_header(path: &str) -> String {
    format!("===== {path} =====\n")
}

/// Runs one collection end to end and returns the run report.
///
/// The output artifact is created (truncating any previous run) before the
/// first entry is written, then appended to per qualifying file, in archive
/// enumeration order.
pub async fn collect<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &CollectConfig,
    rules: &FilterRules,
) -> Result<CollectReport> {
    let output_path = match &config.output {
        Some(path) => path.clone(),
        None => PathBuf::from(output_file_name(&config.repo_url)),
    };

    let (archive_bytes, branch) =
        fetch::download_archive(fetcher, &config.repo_url, config.branch.as_deref()).await?;
    info!(
        branch = %branch,
        size = archive_bytes.len(),
        "Archive fetched, enumerating entries"
    );

    let entries = archive::read_entries(&archive_bytes)
        .with_context(|| format!("failed to enumerate archive entries for {}", config.repo_url))?;

    let mut output = File::create(&output_path)
        .with_context(|| format!("failed to create output file {}", output_path.display()))?;

    let entries_seen = entries.len();
    let mut files_written = 0usize;
    let mut bytes_written = 0usize;

    for entry in entries {
        if !rules.matches_desired_extension(&entry.path) || !rules.is_likely_useful(&entry.path) {
            debug!(path = %entry.path, "Entry skipped by path rules");
            continue;
        }

        let content = String::from_utf8(entry.bytes)
            .with_context(|| format!("entry {} is not valid UTF-8", entry.path))?;

        if !rules.has_sufficient_content(&content) {
            debug!(path = %entry.path, "Entry skipped: not enough substantive lines");
            continue;
        }

        output
            .write_all(entry_header(&entry.path).as_bytes())
            .with_context(|| format!("failed to write header for {}", entry.path))?;
        output
            .write_all(content.as_bytes())
            .with_context(|| format!("failed to write content of {}", entry.path))?;
        if !content.ends_with('\n') {
            output
                .write_all(b"\n")
                .with_context(|| format!("failed to write content of {}", entry.path))?;
        }

        files_written += 1;
        bytes_written += content.len();
        info!(path = %entry.path, size = content.len(), "Appended file to corpus");
    }

    info!(
        entries = entries_seen,
        written = files_written,
        output = %output_path.display(),
        "Collection complete"
    );

    Ok(CollectReport {
        output_path,
        branch,
        entries_seen,
        files_written,
        bytes_written,
    })
}
