use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use typefix_cli::config::{
	LOCAL_RULE_FILE, LoadedRuleSet, generate_init_template, load_rule_set, resolve_base_dir,
};
use typefix_cli::fixer::{FileOutcome, FixOptions, fix_files};
use typefix_cli::rules::compile_rule_set;

#[derive(Parser)]
#[command(name = "typefix")]
#[command(
	author,
	version,
	about = "CLI tool for stripping leftover type annotations from converted UI component files"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Directory the target files live in (default: src/components/ui)
	#[arg(long, value_name = "DIR", global = true)]
	base_dir: Option<PathBuf>,

	/// Load rules from this TOML file instead of .typefix.toml or the builtin table
	#[arg(long = "rules", value_name = "FILE", global = true)]
	rule_file: Option<PathBuf>,

	/// Report what would change without writing any file
	#[arg(long)]
	dry_run: bool,

	/// Continue with the next file after a read or write error
	#[arg(long)]
	keep_going: bool,

	/// Create a .typefix.toml holding the builtin rules in the current directory
	#[arg(long, conflicts_with_all = ["dry_run", "keep_going"])]
	init: bool,

	/// Overwrite existing .typefix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Rule set inspection commands
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
}

#[derive(Subcommand)]
enum RulesAction {
	/// Display the effective rule set and where it was loaded from
	Show,
	/// Compile every pattern without touching any file
	Validate,
}

fn main() -> ExitCode {
	typefix_cli::logging::init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	// Handle subcommands
	if let Some(command) = &cli.command {
		return match command {
			Commands::Rules { action } => match action {
				RulesAction::Show => handle_rules_show(&cwd, &cli),
				RulesAction::Validate => handle_rules_validate(&cwd, &cli),
			},
		};
	}

	let options = FixOptions {
		dry_run: cli.dry_run,
		keep_going: cli.keep_going,
	};
	handle_fix(&cwd, &cli, &options)
}

fn load(cwd: &Path, cli: &Cli) -> Result<LoadedRuleSet> {
	load_rule_set(cwd, cli.rule_file.as_deref()).context("Failed to load rule set")
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let rule_path = PathBuf::from(LOCAL_RULE_FILE);

	if rule_path.exists() && !force {
		anyhow::bail!("{LOCAL_RULE_FILE} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template()?;
	std::fs::write(&rule_path, template)
		.with_context(|| format!("Failed to write {}", rule_path.display()))?;

	println!("Created {LOCAL_RULE_FILE}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rules_show(cwd: &Path, cli: &Cli) -> Result<ExitCode> {
	let loaded = load(cwd, cli)?;
	let base_dir = resolve_base_dir(cwd, cli.base_dir.as_deref(), &loaded.rule_set);

	println!("# Source: {}", loaded.source);
	println!("# base-dir: {}", base_dir.display());
	println!("# files: {}", loaded.rule_set.files.len());
	println!("# rules: {}", loaded.rule_set.rule_count());
	println!();

	for file in &loaded.rule_set.files {
		println!("  {}:", file.path);
		for (i, rule) in file.rules.iter().enumerate() {
			println!("    Rule {}:", i + 1);
			println!("      pattern: {}", rule.pattern);
			println!("      replacement: {:?}", rule.replacement);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules_validate(cwd: &Path, cli: &Cli) -> Result<ExitCode> {
	let result = load(cwd, cli).and_then(|loaded| {
		compile_rule_set(&loaded.rule_set).context("Failed to compile rules")?;
		Ok(loaded)
	});

	match result {
		Ok(loaded) => {
			println!(
				"Rule set is valid: {} ({} files, {} rules)",
				loaded.source,
				loaded.rule_set.files.len(),
				loaded.rule_set.rule_count()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Rule set error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_fix(cwd: &Path, cli: &Cli, options: &FixOptions) -> Result<ExitCode> {
	let loaded = load(cwd, cli)?;
	let compiled = compile_rule_set(&loaded.rule_set).context("Failed to compile rules")?;
	let base_dir = resolve_base_dir(cwd, cli.base_dir.as_deref(), &loaded.rule_set);

	let verb = if options.dry_run { "Would fix" } else { "Fixed" };
	let summary = fix_files(&base_dir, &compiled, options, |report| {
		if report.outcome == FileOutcome::Fixed {
			println!("{verb}: {}", report.file);
		}
	})
	.with_context(|| format!("Failed to fix files under {}", base_dir.display()))?;

	let success = summary.is_success();
	for failure in summary.failures {
		eprintln!(
			"Warning: skipped {}: {:#}",
			failure.file,
			anyhow::Error::new(failure.error)
		);
	}

	println!("Done!");

	if success {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}
