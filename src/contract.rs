//! Seam between the collection pipeline and the network.
//!
//! The archive fetch is the only external collaborator worth mocking, so it
//! sits behind a single async trait. The trait is annotated for `mockall`:
//! with the `test-export-mocks` feature (on by default) integration tests can
//! drive the whole pipeline through [`MockFetcher`] without touching the
//! network. The report types returned by the assembler also live here so the
//! CLI and tests share one vocabulary for run outcomes.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Error produced by a single fetch attempt.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// The request never completed (DNS, connect or body-read failure).
    Transport { url: String, source: reqwest::Error },
}

impl FetchError {
    /// Whether the failure was a plain 404. Branch discovery moves on to the
    /// next candidate only for this case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status { url, status } => {
                write!(f, "GET {url} returned status {status}")
            }
            FetchError::Transport { url, source } => {
                write!(f, "GET {url} failed: {source}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Status { .. } => None,
            FetchError::Transport { source, .. } => Some(source),
        }
    }
}

/// Trait for retrieving an archive by URL.
/// Implemented by the real HTTP client and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the full response body for `url`, failing on any non-success
    /// status. No retries.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Summary of one completed collection run.
#[derive(Debug)]
pub struct CollectReport {
    /// Where the combined corpus was written.
    pub output_path: std::path::PathBuf,
    /// Branch whose archive was actually downloaded.
    pub branch: String,
    /// File entries enumerated in the archive.
    pub entries_seen: usize,
    /// Entries that passed all filters and were appended.
    pub files_written: usize,
    /// Total content bytes appended (headers excluded).
    pub bytes_written: usize,
}
