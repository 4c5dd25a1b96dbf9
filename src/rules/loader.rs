use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::data::RulesFile;
use super::registry::Rules;

const EMBEDDED_RULES: &str = include_str!("../../data/rules.json");

/// Load and validate the rules bundled into the binary.
pub fn load_rules() -> Result<Rules> {
    let file: RulesFile =
        serde_json::from_str(EMBEDDED_RULES).context("Failed to parse embedded rules.json")?;
    build(file, "embedded rules.json")
}

pub fn load_rules_from_file(path: &Path) -> Result<Rules> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let file: RulesFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse rules file: {}", path.display()))?;
    build(file, &path.display().to_string())
}

fn build(file: RulesFile, source: &str) -> Result<Rules> {
    let rules =
        Rules::from_file(file).with_context(|| format!("Invalid rules in {}", source))?;
    info!(
        source,
        categories = rules.categories().len(),
        models = rules.models().len(),
        "loaded rules"
    );
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_embedded_rules() {
        let rules = load_rules().expect("Should load embedded rules");
        assert!(!rules.categories().is_empty());
        let names: Vec<&str> = rules.models().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["ChatGPT", "Claude", "Gemini", "Perplexity"]);
        assert_eq!(rules.fallback().recommended_ai, "ChatGPT");
        assert_eq!(rules.fallback().alternative, "Claude");
        assert_eq!(rules.fallback().category, "Genérico");
        assert!(!rules.sample_tasks().is_empty());
    }

    #[test]
    fn test_embedded_references_resolve() {
        let rules = load_rules().unwrap();
        for category in rules.categories() {
            assert!(rules.model(&category.best_ai).is_some(), "{}", category.id);
            assert!(rules.model(&category.alternative).is_some(), "{}", category.id);
        }
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("qualia-test-does-not-exist.json");
        let err = load_rules_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read rules file"));
    }

    #[test]
    fn test_load_from_file_reports_validation_error() {
        let path = std::env::temp_dir().join(format!("qualia-test-rules-{}.json", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r##"{{"schemaVersion": 1, "categories": [], "ais": [
                {{"id": "a", "name": "A", "description": "", "color": "#000000"}}
            ]}}"##
        )
        .unwrap();
        drop(f);

        let err = load_rules_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("Invalid rules"));
        let root = err.root_cause().to_string();
        assert!(root.contains("at least 2 models"), "{}", root);
    }
}
