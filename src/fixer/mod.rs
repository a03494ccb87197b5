//! Applying a rule set to files on disk.
//!
//! This module handles:
//! - Resolving target files under a base directory
//! - Reading, rewriting, and conditionally writing back each file
//! - The abort-or-continue policy for I/O failures

use crate::error::{Result, TypefixError};
use crate::rules::{CompiledFileRules, CompiledRuleSet};
use std::path::{Path, PathBuf};

/// What happened to a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
	/// The file does not exist; nothing was done.
	Missing,

	/// The file exists but no substitution changed it.
	Unchanged,

	/// The content changed and was written back (or would be, in a dry run).
	Fixed,
}

/// Result of processing one target file.
#[derive(Debug, Clone)]
pub struct FileReport {
	/// Target path as listed in the rule set.
	pub file: String,

	/// Resolved path on disk.
	pub path: PathBuf,

	/// What happened.
	pub outcome: FileOutcome,

	/// Number of substitutions that changed the content.
	pub substitutions: usize,
}

/// Options controlling a fix run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
	/// Compute outcomes without writing anything.
	pub dry_run: bool,

	/// Record I/O failures and move on to the next file instead of stopping.
	pub keep_going: bool,
}

/// A file that could not be processed during a `keep_going` run.
#[derive(Debug)]
pub struct FileFailure {
	/// Target path as listed in the rule set.
	pub file: String,

	/// The underlying error.
	pub error: TypefixError,
}

/// Everything a fix run produced.
#[derive(Debug, Default)]
pub struct FixSummary {
	/// Reports for files processed without error, in rule set order.
	pub reports: Vec<FileReport>,

	/// Files that failed (only populated when `keep_going` is set).
	pub failures: Vec<FileFailure>,
}

impl FixSummary {
	/// Reports for files whose content changed.
	pub fn fixed(&self) -> impl Iterator<Item = &FileReport> {
		self.reports
			.iter()
			.filter(|r| r.outcome == FileOutcome::Fixed)
	}

	/// Whether every file was processed without error.
	pub fn is_success(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Apply one file's rules under `base_dir`.
///
/// A missing file is not an error. The file is only written when its
/// content actually changed.
pub fn fix_file(base_dir: &Path, rules: &CompiledFileRules, dry_run: bool) -> Result<FileReport> {
	let path = base_dir.join(&rules.path);

	if !path.exists() {
		tracing::debug!(path = %path.display(), "target missing, skipping");
		return Ok(FileReport {
			file: rules.path.clone(),
			path,
			outcome: FileOutcome::Missing,
			substitutions: 0,
		});
	}

	let original = std::fs::read_to_string(&path).map_err(|source| TypefixError::ReadFailed {
		path: path.clone(),
		source,
	})?;

	let (content, substitutions) = rules.apply(&original);

	if content == original {
		tracing::debug!(path = %path.display(), "no changes");
		return Ok(FileReport {
			file: rules.path.clone(),
			path,
			outcome: FileOutcome::Unchanged,
			substitutions: 0,
		});
	}

	if dry_run {
		tracing::info!(path = %path.display(), substitutions, "dry run, not writing");
	} else {
		std::fs::write(&path, &content).map_err(|source| TypefixError::WriteFailed {
			path: path.clone(),
			source,
		})?;
		tracing::info!(path = %path.display(), substitutions, "rewrote file");
	}

	Ok(FileReport {
		file: rules.path.clone(),
		path,
		outcome: FileOutcome::Fixed,
		substitutions,
	})
}

/// Apply a compiled rule set to every target file under `base_dir`, in order.
///
/// `on_report` is called as soon as each file finishes, so callers can
/// stream output. Without `keep_going` the first I/O error stops the run;
/// files already rewritten stay rewritten.
pub fn fix_files<F>(
	base_dir: &Path,
	rule_set: &CompiledRuleSet,
	options: &FixOptions,
	mut on_report: F,
) -> Result<FixSummary>
where
	F: FnMut(&FileReport),
{
	let mut summary = FixSummary::default();

	for rules in &rule_set.files {
		match fix_file(base_dir, rules, options.dry_run) {
			Ok(report) => {
				on_report(&report);
				summary.reports.push(report);
			}
			Err(error) if options.keep_going => {
				tracing::warn!(file = %rules.path, error = %error, "continuing after failure");
				summary.failures.push(FileFailure {
					file: rules.path.clone(),
					error,
				});
			}
			Err(error) => return Err(error),
		}
	}

	Ok(summary)
}
