//! Diagnostic tracing for typefix.
//!
//! Stdout carries the product output (`Fixed: ...`, `Done!`). Diagnostics go
//! to stderr through `tracing`, filtered by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=typefix_cli=debug typefix --dry-run
/// ```
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	// Ignore the error if a global subscriber is already installed.
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).compact())
		.try_init();
}
