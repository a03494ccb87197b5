use crate::error::{Result, TypefixError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Base directory used when neither the CLI nor the rule file names one.
pub const DEFAULT_BASE_DIR: &str = "src/components/ui";

/// A complete rewrite rule set, as loaded from `.typefix.toml` or the builtin table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleSet {
	/// Directory the target paths are relative to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base_dir: Option<PathBuf>,

	/// Target files, processed in listed order.
	#[serde(default)]
	pub files: Vec<FileRules>,
}

/// The ordered substitutions for a single target file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRules {
	/// Path of the target file, relative to the base directory.
	pub path: String,

	/// Substitutions applied in order; each one sees the output of the previous.
	#[serde(default)]
	pub rules: Vec<Replacement>,
}

/// One (pattern, replacement) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
	/// Regex pattern. Compiled with `.` matching newlines.
	pub pattern: String,

	/// Replacement text. Supports `$1` / `${name}` capture references.
	#[serde(default)]
	pub replacement: String,
}

impl Replacement {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
		Replacement {
			pattern: pattern.into(),
			replacement: replacement.into(),
		}
	}
}

impl FileRules {
	/// Validate that the target path is usable as a key under the base directory.
	pub fn validate(&self) -> Result<()> {
		if self.path.trim().is_empty() {
			return Err(TypefixError::InvalidTarget {
				file: self.path.clone(),
				reason: "path is empty",
			});
		}

		if Path::new(&self.path).is_absolute() {
			return Err(TypefixError::InvalidTarget {
				file: self.path.clone(),
				reason: "path must be relative to the base directory",
			});
		}

		Ok(())
	}
}

impl RuleSet {
	/// Validate all target files in this rule set.
	pub fn validate(&self) -> Result<()> {
		let mut seen = HashSet::new();
		for file in &self.files {
			file.validate()?;
			if !seen.insert(file.path.as_str()) {
				return Err(TypefixError::DuplicateTarget {
					file: file.path.clone(),
				});
			}
		}
		Ok(())
	}

	/// Total number of substitutions across all files.
	pub fn rule_count(&self) -> usize {
		self.files.iter().map(|f| f.rules.len()).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn file(path: &str) -> FileRules {
		FileRules {
			path: path.to_string(),
			rules: vec![Replacement::new("a", "b")],
		}
	}

	#[test]
	fn test_validate_accepts_distinct_relative_paths() {
		let set = RuleSet {
			base_dir: None,
			files: vec![file("form.js"), file("nested/sheet.js")],
		};
		assert!(set.validate().is_ok());
		assert_eq!(set.rule_count(), 2);
	}

	#[test]
	fn test_validate_rejects_duplicate_target() {
		let set = RuleSet {
			base_dir: None,
			files: vec![file("form.js"), file("form.js")],
		};
		match set.validate().unwrap_err() {
			TypefixError::DuplicateTarget { file } => assert_eq!(file, "form.js"),
			other => panic!("Expected DuplicateTarget error, got {other:?}"),
		}
	}

	#[test]
	fn test_validate_rejects_empty_path() {
		let set = RuleSet {
			base_dir: None,
			files: vec![file("  ")],
		};
		assert!(matches!(
			set.validate().unwrap_err(),
			TypefixError::InvalidTarget { .. }
		));
	}

	#[cfg(unix)]
	#[test]
	fn test_validate_rejects_absolute_path() {
		let set = RuleSet {
			base_dir: None,
			files: vec![file("/etc/passwd")],
		};
		assert!(matches!(
			set.validate().unwrap_err(),
			TypefixError::InvalidTarget { .. }
		));
	}
}
