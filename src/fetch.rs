use anyhow::{anyhow, Result};
use tracing::{error, info};

use crate::contract::{FetchError, Fetcher};

/// Redirection service used for URLs that point at a repository
/// subdirectory (`/tree/...`). Third-party service, known to be flaky.
const TREE_REDIRECT_SERVICE: &str = "https://download-directory.github.io/?";

/// Branch candidates tried, in order, when none is given on the command line.
const DEFAULT_BRANCH_CANDIDATES: [&str; 2] = ["master", "main"];

/// Builds the archive download URL for a repository and branch. URLs with a
/// `/tree/` subdirectory marker are routed through the redirection service
/// before the archive suffix is appended.
pub fn resolve_archive_url(repo_url: &str, branch: &str) -> String {
    let base = if repo_url.contains("/tree/") {
        format!("{TREE_REDIRECT_SERVICE}{repo_url}")
    } else {
        repo_url.to_string()
    };
    format!("{base}/archive/{branch}.zip")
}

/// HTTP implementation of [`Fetcher`] backed by a reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!(url = %url, "Fetching archive");
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, url = %url, "Archive request failed");
            FetchError::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url = %url, "Archive request returned non-success status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, url = %url, "Failed to read archive response body");
            FetchError::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;
        info!(url = %url, size = bytes.len(), "Archive downloaded");
        Ok(bytes.to_vec())
    }
}

/// Downloads the repository archive. An explicit branch is fetched as-is;
/// otherwise the default candidates are tried in order, moving on only when
/// a candidate's archive does not exist. Returns the archive bytes together
/// with the branch that produced them.
pub async fn download_archive<F: Fetcher + ?Sized>(
    fetcher: &F,
    repo_url: &str,
    branch: Option<&str>,
) -> Result<(Vec<u8>, String)> {
    let candidates: Vec<&str> = match branch {
        Some(reference) => vec![reference],
        None => DEFAULT_BRANCH_CANDIDATES.to_vec(),
    };

    let mut last_not_found: Option<FetchError> = None;
    for candidate in candidates {
        let url = resolve_archive_url(repo_url, candidate);
        match fetcher.fetch_bytes(&url).await {
            Ok(bytes) => return Ok((bytes, candidate.to_string())),
            Err(e) if e.is_not_found() => {
                info!(branch = candidate, url = %url, "Branch not found, trying next candidate");
                last_not_found = Some(e);
            }
            Err(e) => {
                return Err(
                    anyhow!(e).context(format!("failed to download archive for {repo_url}"))
                );
            }
        }
    }

    match last_not_found {
        Some(e) => Err(anyhow!(e).context(format!("no archive branch found for {repo_url}"))),
        None => Err(anyhow!("no branch candidates to try for {repo_url}")),
    }
}
