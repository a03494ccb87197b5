//! Pattern compilation and text rewriting for typefix.
//!
//! This module handles:
//! - Compiling rule patterns with `.` matching across lines
//! - Applying a file's substitutions in order over its whole content

pub mod compiler;
pub mod substitution;

pub use compiler::{CompiledFileRules, CompiledRuleSet, compile_rule_set};
pub use substitution::Substitution;
