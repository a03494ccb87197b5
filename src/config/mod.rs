//! Rule set loading for typefix.
//!
//! This module handles:
//! - The builtin rule table
//! - TOML rule file parsing and validation
//! - Rule source and base directory resolution
//! - Template generation for `--init`

pub mod builtin;
pub mod parser;
pub mod source;
pub mod template;
pub mod types;

pub use builtin::builtin_rule_set;
pub use parser::{parse_rule_file, parse_rule_str};
pub use source::{
	LOCAL_RULE_FILE, LoadedRuleSet, RuleSource, load_rule_set, resolve_base_dir,
	resolve_rule_source,
};
pub use template::generate_init_template;
pub use types::{DEFAULT_BASE_DIR, FileRules, Replacement, RuleSet};
