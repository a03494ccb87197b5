//! The builtin rule table for the shadcn-style UI components under `src/components/ui`.
//!
//! Each entry strips one piece of TypeScript syntax that survived conversion to
//! plain JavaScript. Order within a file matters.

use crate::config::types::{DEFAULT_BASE_DIR, FileRules, Replacement, RuleSet};
use std::path::PathBuf;

type Table = &'static [(&'static str, &'static [(&'static str, &'static str)])];

const BUILTIN_TABLE: Table = &[
	(
		"form.js",
		&[
			(r"type FormFieldContextValue<[^>]*>", ""),
			(
				r"React.createContext<FormFieldContextValue>\(\{\} as FormFieldContextValue\)",
				"React.createContext({})",
			),
			(r"const FormField = <[^>]*>", "const FormField ="),
			(r"type FormItemContextValue = \{[^}]*\}", ""),
			(
				r"React.createContext<FormItemContextValue>\(\{\} as FormItemContextValue\)",
				"React.createContext({})",
			),
		],
	),
	(
		"menubar.js",
		&[(
			r"const MenubarShortcut = \(\{ className, \.\.\.props \}[^:]*: React\.HTMLAttributes<HTMLSpanElement>\)",
			"const MenubarShortcut = ({ className, ...props })",
		)],
	),
	(
		"pagination.js",
		&[
			(
				r#"const Pagination = \(\{ className, \.\.\.props \}[^:]*: React\.ComponentProps<"nav">\)"#,
				"const Pagination = ({ className, ...props })",
			),
			(r"type PaginationLinkProps = \{[^}]*\}", ""),
			(
				r"const PaginationPrevious = \(\{ className, \.\.\.props \}[^:]*: React\.ComponentProps<typeof PaginationLink>\)",
				"const PaginationPrevious = ({ className, ...props })",
			),
			(
				r"const PaginationNext = \(\{ className, \.\.\.props \}[^:]*: React\.ComponentProps<typeof PaginationLink>\)",
				"const PaginationNext = ({ className, ...props })",
			),
			(
				r#"const PaginationEllipsis = \(\{ className, \.\.\.props \}[^:]*: React\.ComponentProps<"span">\)"#,
				"const PaginationEllipsis = ({ className, ...props })",
			),
		],
	),
	(
		"resizable.js",
		&[
			(
				r"const ResizablePanelGroup = \(\{ className, \.\.\.props \}[^:]*: React\.ComponentProps<typeof ResizablePrimitive\.PanelGroup>\)",
				"const ResizablePanelGroup = ({ className, ...props })",
			),
			(
				r"[^:]*: React\.ComponentProps<typeof ResizablePrimitive\.PanelResizeHandle>\)",
				")",
			),
		],
	),
	(
		"sheet.js",
		&[
			(r"interface SheetContentProps[^{]*\{[^}]*\}", ""),
			(
				r"const SheetHeader = \(\{ className, \.\.\.props \}[^:]*: React\.HTMLAttributes<HTMLDivElement>\)",
				"const SheetHeader = ({ className, ...props })",
			),
			(
				r"const SheetFooter = \(\{ className, \.\.\.props \}[^:]*: React\.HTMLAttributes<HTMLDivElement>\)",
				"const SheetFooter = ({ className, ...props })",
			),
		],
	),
	(
		"skeleton.js",
		&[
			(
				r"function Skeleton\(\{ className, \.\.\.props \}[^:]*: React\.HTMLAttributes<HTMLDivElement>\)",
				"function Skeleton({ className, ...props })",
			),
			// Arrow-function variant emitted by some converters.
			(
				r"const Skeleton = \(\{ className, \.\.\.props \}[^:]*: React\.HTMLAttributes<HTMLDivElement>\)",
				"function Skeleton({ className, ...props })",
			),
		],
	),
	(
		"sonner.js",
		&[
			(r"type ToasterProps = React\.ComponentProps<typeof Sonner>;", ""),
			(r#"theme=\{theme as ToasterProps\["theme"\]\}"#, "theme={theme}"),
		],
	),
];

/// Build the builtin rule set.
pub fn builtin_rule_set() -> RuleSet {
	let files = BUILTIN_TABLE
		.iter()
		.map(|(path, rules)| FileRules {
			path: path.to_string(),
			rules: rules
				.iter()
				.map(|(pattern, replacement)| Replacement::new(*pattern, *replacement))
				.collect(),
		})
		.collect();

	RuleSet {
		base_dir: Some(PathBuf::from(DEFAULT_BASE_DIR)),
		files,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::compile_rule_set;

	#[test]
	fn test_builtin_is_valid_and_compiles() {
		let set = builtin_rule_set();
		assert!(set.validate().is_ok());
		assert!(compile_rule_set(&set).is_ok());
	}

	#[test]
	fn test_builtin_file_order() {
		let set = builtin_rule_set();
		let names: Vec<_> = set.files.iter().map(|f| f.path.as_str()).collect();
		assert_eq!(
			names,
			vec![
				"form.js",
				"menubar.js",
				"pagination.js",
				"resizable.js",
				"sheet.js",
				"skeleton.js",
				"sonner.js",
			]
		);
	}

	#[test]
	fn test_builtin_base_dir() {
		assert_eq!(
			builtin_rule_set().base_dir,
			Some(PathBuf::from("src/components/ui"))
		);
	}

	fn fix(path: &str, input: &str) -> String {
		let compiled = compile_rule_set(&builtin_rule_set()).unwrap();
		let file = compiled
			.files
			.iter()
			.find(|f| f.path == path)
			.expect("builtin entry");
		file.apply(input).0
	}

	#[test]
	fn test_skeleton_arrow_function() {
		let input = "const Skeleton = ({ className, ...props }: React.HTMLAttributes<HTMLDivElement>) => {";
		assert_eq!(
			fix("skeleton.js", input),
			"function Skeleton({ className, ...props }) => {"
		);
	}

	#[test]
	fn test_skeleton_function_declaration() {
		let input = "function Skeleton({\n  className, ...props }: React.HTMLAttributes<HTMLDivElement>) {";
		// The pattern requires the literal "({ className, ...props }" head.
		assert_eq!(fix("skeleton.js", input), input);

		let input = "function Skeleton({ className, ...props }: React.HTMLAttributes<HTMLDivElement>) {";
		assert_eq!(
			fix("skeleton.js", input),
			"function Skeleton({ className, ...props }) {"
		);
	}

	#[test]
	fn test_form_context_casts() {
		let input = "const FormFieldContext = React.createContext<FormFieldContextValue>({} as FormFieldContextValue)\n\
			const FormItemContext = React.createContext<FormItemContextValue>({} as FormItemContextValue)\n";
		assert_eq!(
			fix("form.js", input),
			"const FormFieldContext = React.createContext({})\n\
			const FormItemContext = React.createContext({})\n"
		);
	}

	#[test]
	fn test_form_type_block_spans_lines() {
		let input = "type FormItemContextValue = {\n  id: string\n}\n\nconst x = 1\n";
		assert_eq!(fix("form.js", input), "\n\nconst x = 1\n");
	}

	#[test]
	fn test_sonner_theme_cast() {
		let input = "type ToasterProps = React.ComponentProps<typeof Sonner>;\n<Sonner theme={theme as ToasterProps[\"theme\"]} />\n";
		assert_eq!(fix("sonner.js", input), "\n<Sonner theme={theme} />\n");
	}

	#[test]
	fn test_pagination_nav_props() {
		let input = "const Pagination = ({ className, ...props }: React.ComponentProps<\"nav\">) => (";
		assert_eq!(
			fix("pagination.js", input),
			"const Pagination = ({ className, ...props }) => ("
		);
	}
}
