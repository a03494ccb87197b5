use crate::config::types::{FileRules, RuleSet};
use crate::error::Result;
use crate::rules::substitution::Substitution;

/// A target file with its substitutions compiled, ready to apply.
#[derive(Debug)]
pub struct CompiledFileRules {
	/// Path of the target file, relative to the base directory.
	pub path: String,

	/// Substitutions in application order.
	pub substitutions: Vec<Substitution>,
}

impl CompiledFileRules {
	/// Compile all rules for one target file.
	pub fn compile(file: &FileRules) -> Result<Self> {
		let substitutions = file
			.rules
			.iter()
			.map(|rule| Substitution::compile(&file.path, rule))
			.collect::<Result<Vec<_>>>()?;

		Ok(CompiledFileRules {
			path: file.path.clone(),
			substitutions,
		})
	}

	/// Apply every substitution in order, each one to the previous output.
	///
	/// Returns the final text and how many substitutions changed it.
	pub fn apply(&self, input: &str) -> (String, usize) {
		let mut content = input.to_string();
		let mut changed = 0;

		for (index, substitution) in self.substitutions.iter().enumerate() {
			let next = substitution.apply(&content);
			if next != content {
				tracing::debug!(file = %self.path, rule = index + 1, "rule matched");
				changed += 1;
				content = next.into_owned();
			}
		}

		(content, changed)
	}
}

/// A fully compiled rule set.
#[derive(Debug)]
pub struct CompiledRuleSet {
	/// Target files in processing order.
	pub files: Vec<CompiledFileRules>,
}

/// Compile every pattern in a rule set.
pub fn compile_rule_set(rule_set: &RuleSet) -> Result<CompiledRuleSet> {
	let files = rule_set
		.files
		.iter()
		.map(CompiledFileRules::compile)
		.collect::<Result<Vec<_>>>()?;

	Ok(CompiledRuleSet { files })
}
