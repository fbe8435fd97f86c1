use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::filter::FilterRules;

/// Loads filter rules from a YAML file. Every key is optional: omitted
/// fields keep the built-in defaults, so a rules file only needs to name
/// what it changes.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<FilterRules> {
    let path_ref = path.as_ref();
    info!(rules_path = ?path_ref, "Loading filter rules from file");

    let content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(rules_path = ?path_ref, "Rules file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, rules_path = ?path_ref, "Failed to read rules file");
            return Err(anyhow::anyhow!(
                "Failed to read rules file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let rules: FilterRules = match serde_yaml::from_str(&content) {
        Ok(rules) => {
            info!(rules_path = ?path_ref, "Parsed rules YAML successfully");
            rules
        }
        Err(e) => {
            error!(error = ?e, rules_path = ?path_ref, "Failed to parse rules YAML");
            return Err(anyhow::anyhow!("Failed to parse rules YAML: {e}"));
        }
    };

    Ok(rules)
}
