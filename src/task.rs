use crate::compiler;
use crate::config::{self, BuildConfig};
use crate::relocate::{back_path, Outcome, Relocator, SnippetRegion};
use anyhow::Result;
use color_print::*;

#[derive(clap::Args, Clone, Debug, Default)]
pub struct PatchArgs {
	#[clap(flatten)]
	config: config::Args,

	/// Pages to patch instead of the configured targets
	targets: Vec<String>,

	/// Warn instead of failing when a page has no embedded library
	#[arg(long)]
	allow_missing: bool,
}

/// Compile the library, then relocate its embedded copies.
pub fn build(config: &BuildConfig) -> Result<()> {
	compile(config)?;
	patch(config, &config.targets, config.allow_missing_snippet)
}

pub fn compile(config: &BuildConfig) -> Result<()> {
	compiler::run(config)?;
	Ok(())
}

pub fn run_patch(args: PatchArgs) -> Result<()> {
	let config = &args.config.load()?;

	let targets = if args.targets.is_empty() {
		&config.targets
	} else {
		&args.targets
	};

	patch(config, targets, args.allow_missing || config.allow_missing_snippet)
}

pub fn patch(config: &BuildConfig, targets: &[String], allow_missing: bool) -> Result<()> {
	let map = config.output_js_map();
	let map_path = config.map_path();
	let region = SnippetRegion::new(&config.wrapper_begin, &map)?;
	let relocator = Relocator::from_artifact(
		region,
		&config.artifact_path(),
		&[map_path.as_path()],
		&config.output_dir,
		&map,
	)?;

	for target in targets {
		match relocator.patch(target, allow_missing)? {
			Outcome::Patched => cprintln!("<g!>Patched</> <s>{}</> <k!>({}{}/{})", target, back_path(target), config.output_dir, map),
			Outcome::Unchanged => cprintln!("<b!>Up to date</> <s>{}", target),
			Outcome::Skipped => ceprintln!("<y!><s>Warning:</></> no embedded library in <s>{}</>, left unchanged", target),
		}
	}

	Ok(())
}

pub fn print_config(config: &BuildConfig) -> Result<()> {
	print!("{}", config.to_toml()?);
	Ok(())
}
