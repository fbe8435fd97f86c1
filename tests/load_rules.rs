use std::fs::write;

use repo_corpus::load_rules::load_rules;
use tempfile::NamedTempFile;

#[test]
fn rules_file_overrides_only_named_fields() {
    let file = NamedTempFile::new().expect("Creating temp rules file failed");
    write(
        file.path(),
        b"extensions:\n  - \".md\"\n  - \".py\"\nmin_line_count: 3\n",
    )
    .expect("Writing temp rules failed");

    let rules = load_rules(file.path()).unwrap();
    assert_eq!(rules.extensions, vec![".md".to_string(), ".py".to_string()]);
    assert_eq!(rules.min_line_count, 3);

    // Unnamed fields keep their defaults.
    assert!(rules.excluded_dirs.iter().any(|d| d == "tests"));
    assert!(rules.excluded_files.iter().any(|f| f == "setup.py"));
}

#[test]
fn lowercase_markup_extensions_can_be_enabled_via_rules() {
    let file = NamedTempFile::new().expect("Creating temp rules file failed");
    write(
        file.path(),
        b"extensions:\n  - \".html\"\n  - \".css\"\n",
    )
    .expect("Writing temp rules failed");

    let rules = load_rules(file.path()).unwrap();
    assert!(rules.matches_desired_extension("frontend/page.html"));
    assert!(rules.matches_desired_extension("assets/style.css"));
    assert!(!rules.matches_desired_extension("frontend/page.HTML"));
}

#[test]
fn missing_rules_file_is_an_error() {
    let result = load_rules("/definitely/not/a/real/rules.yaml");
    assert!(result.is_err());
}

#[test]
fn mistyped_rules_yaml_is_an_error() {
    let file = NamedTempFile::new().expect("Creating temp rules file failed");
    write(file.path(), b"min_line_count: \"many\"\n").expect("Writing temp rules failed");

    let result = load_rules(file.path());
    assert!(result.is_err());
}
