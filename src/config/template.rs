use crate::config::builtin::builtin_rule_set;
use crate::error::{Result, TypefixError};

const TEMPLATE_HEADER: &str = "\
# typefix rule file
#
# Each [[files]] entry names a file relative to base-dir. Its [[files.rules]]
# are applied in order to the whole file; `.` matches newlines and every
# match is replaced. Replacements may use $1 or ${name} capture references.
# The file is only rewritten when its content changes.

";

/// Generate a `.typefix.toml` template holding the builtin rules.
pub fn generate_init_template() -> Result<String> {
	let body = toml::to_string(&builtin_rule_set())
		.map_err(|source| TypefixError::TemplateSerialize { source })?;
	Ok(format!("{TEMPLATE_HEADER}{body}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::parse_rule_str;
	use std::path::Path;

	#[test]
	fn test_template_parses_back_to_builtin() {
		let template = generate_init_template().unwrap();
		assert!(template.starts_with("# typefix rule file"));

		let parsed = parse_rule_str(&template, Path::new(".typefix.toml")).unwrap();
		assert_eq!(parsed, builtin_rule_set());
	}
}
