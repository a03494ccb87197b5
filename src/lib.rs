//! Typefix - CLI tool for stripping leftover type annotations from UI component files.
//!
//! This library provides the core functionality for typefix, including:
//! - The builtin rule table and TOML rule file loading
//! - Pattern compilation with whole-file, multi-line matching
//! - Ordered global substitution and conditional write-back
//!
//! # Example
//!
//! ```no_run
//! use typefix_cli::config::{builtin_rule_set, resolve_base_dir};
//! use typefix_cli::fixer::{FixOptions, fix_files};
//! use typefix_cli::rules::compile_rule_set;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let rule_set = builtin_rule_set();
//! let compiled = compile_rule_set(&rule_set).unwrap();
//! let base_dir = resolve_base_dir(&cwd, None, &rule_set);
//!
//! fix_files(&base_dir, &compiled, &FixOptions::default(), |report| {
//!     println!("{}: {:?}", report.file, report.outcome);
//! })
//! .unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fixer;
pub mod logging;
pub mod rules;

pub use error::{Result, TypefixError};
