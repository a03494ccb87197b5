use crate::config::types::Replacement;
use crate::error::{Result, TypefixError};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// A compiled (pattern, replacement) pair.
#[derive(Debug)]
pub struct Substitution {
	/// The pattern to match. `.` matches newlines.
	pub pattern: Regex,

	/// The replacement string, with `$name` capture expansion.
	pub replacement: String,
}

impl Substitution {
	/// Compile a replacement rule belonging to `file`.
	pub fn compile(file: &str, rule: &Replacement) -> Result<Self> {
		let pattern = RegexBuilder::new(&rule.pattern)
			.dot_matches_new_line(true)
			.build()
			.map_err(|source| TypefixError::InvalidRegex {
				file: file.to_string(),
				pattern: rule.pattern.clone(),
				source,
			})?;

		Ok(Substitution {
			pattern,
			replacement: rule.replacement.clone(),
		})
	}

	/// Replace every non-overlapping match in `input`.
	///
	/// Borrows `input` unchanged when nothing matches.
	pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, self.replacement.as_str())
	}
}
