//! # Document Loading
//!
//! Reads work documents and rule configuration from disk. Files ending in
//! `.yaml` or `.yml` are parsed as YAML, everything else as JSON.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use pdcalc_core::Work;
use pdcalc_rules::RulesConfig;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&raw).with_context(|| format!("invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
    }
}

/// Load and validate a work document.
pub fn load_work(path: &Path) -> anyhow::Result<Work> {
    let work: Work = read_document(path)?;
    work.validate()
        .with_context(|| format!("work document {} is inconsistent", path.display()))?;
    tracing::debug!(path = %path.display(), title = %work.title, authors = work.authors.len(), "work loaded");
    Ok(work)
}

/// Load rule configuration.
pub fn load_rules_config(path: &Path) -> anyhow::Result<RulesConfig> {
    read_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_work() {
        let file = write_temp(
            ".json",
            r#"{"title": "Film", "type": "film", "creation_date": "19500101", "date": "19500601"}"#,
        );
        let work = load_work(file.path()).unwrap();
        assert_eq!(work.title, "Film");
        assert!(work.is_published());
    }

    #[test]
    fn test_load_yaml_work() {
        let file = write_temp(
            ".yml",
            "title: Song\ntype: composition\ncreation_date: '1920-01-01'\nauthors:\n  - name: A\n    type: person\n    death_date: '19300101'\n    country: fr\n",
        );
        let work = load_work(file.path()).unwrap();
        assert_eq!(work.authors.len(), 1);
    }

    #[test]
    fn test_load_rejects_inconsistent_dates() {
        let file = write_temp(
            ".json",
            r#"{"title": "t", "type": "literary", "creation_date": "19000101",
                "authors": [{"name": "a", "type": "person", "birth_date": "19000101", "death_date": "18000101"}]}"#,
        );
        let err = load_work(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("died"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_work(Path::new("/nonexistent/work.json")).is_err());
    }

    #[test]
    fn test_load_rules_config() {
        let file = write_temp(".yaml", "missing_death_policy: strict\n");
        assert_eq!(load_rules_config(file.path()).unwrap(), RulesConfig::strict());
    }
}
