use crate::config::types::RuleSet;
use crate::error::{Result, TypefixError};
use std::path::Path;

/// Parse a rule file from the given path.
pub fn parse_rule_file(path: &Path) -> Result<RuleSet> {
	let content = std::fs::read_to_string(path).map_err(|source| TypefixError::RuleFileRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rule_str(&content, path)
}

/// Parse a rule set from a string (useful for testing).
pub fn parse_rule_str(content: &str, path: &Path) -> Result<RuleSet> {
	let rule_set: RuleSet =
		toml::from_str(content).map_err(|source| TypefixError::RuleFileParse {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed rule set
	rule_set.validate()?;

	Ok(rule_set)
}
