use std::path::PathBuf;

/// Library-level structured errors for typefix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum TypefixError {
	#[error("Failed to read rule file: {path}")]
	RuleFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rule file: {path}")]
	RuleFileParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to render rule file template")]
	TemplateSerialize {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Invalid regex pattern for {file}: {pattern}")]
	InvalidRegex {
		file: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Target file listed more than once: {file}")]
	DuplicateTarget { file: String },

	#[error("Invalid target file {file:?}: {reason}")]
	InvalidTarget { file: String, reason: &'static str },

	#[error("Failed to read {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using TypefixError.
pub type Result<T> = std::result::Result<T, TypefixError>;
