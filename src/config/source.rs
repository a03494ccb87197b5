use crate::config::builtin::builtin_rule_set;
use crate::config::parser::parse_rule_file;
use crate::config::types::{DEFAULT_BASE_DIR, RuleSet};
use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the rule file picked up from the working directory.
pub const LOCAL_RULE_FILE: &str = ".typefix.toml";

/// Where the effective rule set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
	/// The compiled-in table.
	Builtin,

	/// A TOML rule file.
	File(PathBuf),
}

impl fmt::Display for RuleSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RuleSource::Builtin => f.write_str("builtin"),
			RuleSource::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// A loaded rule set with its source for display.
#[derive(Debug, Clone)]
pub struct LoadedRuleSet {
	/// The parsed rule set.
	pub rule_set: RuleSet,

	/// Where it was loaded from.
	pub source: RuleSource,
}

/// Decide which rule set to use.
///
/// The lookup order is:
/// 1. An explicit rule file, resolved against `cwd` when relative
/// 2. `.typefix.toml` in `cwd`
/// 3. The builtin table
pub fn resolve_rule_source(cwd: &Path, explicit: Option<&Path>) -> RuleSource {
	if let Some(path) = explicit {
		return RuleSource::File(cwd.join(path));
	}

	let local = cwd.join(LOCAL_RULE_FILE);
	if local.exists() {
		RuleSource::File(local)
	} else {
		RuleSource::Builtin
	}
}

/// Resolve and load the effective rule set.
pub fn load_rule_set(cwd: &Path, explicit: Option<&Path>) -> Result<LoadedRuleSet> {
	let source = resolve_rule_source(cwd, explicit);
	let rule_set = match &source {
		RuleSource::Builtin => builtin_rule_set(),
		RuleSource::File(path) => parse_rule_file(path)?,
	};

	tracing::debug!(%source, files = rule_set.files.len(), "loaded rule set");

	Ok(LoadedRuleSet { rule_set, source })
}

/// Resolve the directory target paths are joined onto.
///
/// A CLI override wins over the rule set's `base-dir`, which wins over
/// the default. Relative paths resolve against `cwd`.
pub fn resolve_base_dir(cwd: &Path, cli_override: Option<&Path>, rule_set: &RuleSet) -> PathBuf {
	let base = cli_override
		.map(Path::to_path_buf)
		.or_else(|| rule_set.base_dir.clone())
		.unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));

	cwd.join(base)
}
