use serde::Deserialize;

/// Filtering rules applied to every archive entry before its content is
/// added to the corpus.
///
/// Defaults reproduce the historical collection behavior; a YAML rules file
/// (see [`crate::load_rules`]) can override any field individually.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterRules {
    /// Path suffixes that qualify a file for collection. Compared
    /// case-sensitively: the default `.HTML`/`.CSS` entries do not match
    /// their lowercase filesystem counterparts.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names excluded when they appear as a full path segment.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    /// File names excluded wherever they appear as a substring of the path.
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,
    /// Workflow and documentation markers excluded as path substrings.
    #[serde(default = "default_excluded_markers")]
    pub excluded_markers: Vec<String>,
    /// Minimum number of substantive lines a file must contain.
    #[serde(default = "default_min_line_count")]
    pub min_line_count: usize,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            excluded_files: default_excluded_files(),
            excluded_markers: default_excluded_markers(),
            min_line_count: default_min_line_count(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    to_strings(&[".py", ".HTML", ".CSS", ".js", ".ts", ".svelte", ".rs"])
}

fn default_excluded_dirs() -> Vec<String> {
    to_strings(&[
        "docs",
        "examples",
        "tests",
        "test",
        "__pycache__",
        "scripts",
        "utils",
        "benchmarks",
        "node_modules",
        ".venv",
    ])
}

fn default_excluded_files() -> Vec<String> {
    to_strings(&["hubconf.py", "setup.py", "package-lock.json"])
}

fn default_excluded_markers() -> Vec<String> {
    to_strings(&["stale.py", "gen-card-", "write_model_card"])
}

fn default_min_line_count() -> usize {
    10
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl FilterRules {
    /// True iff the path ends with one of the configured extensions.
    pub fn matches_desired_extension(&self, path: &str) -> bool {
        self.extensions
            .iter()
            .any(|extension| path.ends_with(extension.as_str()))
    }

    /// Path-based usefulness check: rejects hidden segments, excluded
    /// directories (matched as whole segments, not substrings), and the
    /// configured file-name and marker substrings.
    pub fn is_likely_useful(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|segment| segment.starts_with('.')) {
            return false;
        }

        // Everything but the final component names a directory.
        let dir_segments = &segments[..segments.len().saturating_sub(1)];
        if self
            .excluded_dirs
            .iter()
            .any(|dir| dir_segments.contains(&dir.as_str()))
        {
            return false;
        }

        if self
            .excluded_files
            .iter()
            .any(|name| path.contains(name.as_str()))
        {
            return false;
        }

        self.excluded_markers
            .iter()
            .all(|marker| !path.contains(marker.as_str()))
    }

    /// True iff the content has at least `min_line_count` lines left after
    /// dropping blank lines and lines whose trimmed form starts with `#`.
    pub fn has_sufficient_content(&self, content: &str) -> bool {
        let substantive = content
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .count();
        substantive >= self.min_line_count
    }
}
