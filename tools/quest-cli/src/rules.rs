use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quest_rules::RuleTables;

/// Built-in tables, with whatever `path` names replacing the defaults.
pub fn load_rules(path: Option<&Path>) -> Result<RuleTables> {
    let Some(path) = path else {
        return Ok(RuleTables::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading rule tables from {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid rule tables in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_means_defaults() {
        assert_eq!(load_rules(None).unwrap(), RuleTables::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_rules(Some(Path::new("/nonexistent/rules.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.toml"));
    }
}
