use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use tracing::debug;

/// One file record inside a repository archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Path as stored in the archive, e.g. `repo-master/src/app.py`.
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Reads all file entries from in-memory zip bytes, in archive order.
/// Directory entries are skipped. Malformed bytes fail with a format error;
/// there is no partial recovery.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut container = zip::ZipArchive::new(Cursor::new(bytes))
        .context("archive bytes are not a readable zip container")?;

    let mut entries = Vec::with_capacity(container.len());
    for index in 0..container.len() {
        let mut file = container
            .by_index(index)
            .with_context(|| format!("failed to open archive entry {index}"))?;
        if file.is_dir() {
            continue;
        }

        let path = file.name().to_string();
        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)
            .with_context(|| format!("failed to read archive entry {path}"))?;
        debug!(path = %path, size = bytes.len(), "Read archive entry");
        entries.push(ArchiveEntry { path, bytes });
    }

    Ok(entries)
}
