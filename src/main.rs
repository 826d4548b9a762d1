mod types;
mod config;
mod compiler;
mod relocate;
mod task;

use clap::Parser;
use color_print::*;

#[derive(clap::Parser)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true, disable_help_subcommand = true, flatten_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Command>,

	#[clap(flatten)]
	args: compiler::Args,
}

#[derive(clap::Subcommand, Clone)]
enum Command {
	/// Compile the library and relocate its copies embedded in pages (default)
	Build(compiler::Args),
	/// Only run Closure Compiler
	Compile(compiler::Args),
	/// Only relocate the embedded copies of an already compiled library
	Patch(task::PatchArgs),
	/// Print the resolved build configuration
	Config(config::Args),
}

fn main() {
	let cli = Cli::parse();
	let command = cli.command.unwrap_or_else(|| Command::Build(cli.args));

	let result = match command {
		Command::Build(args) => args.load().and_then(|config| task::build(&config)),
		Command::Compile(args) => args.load().and_then(|config| task::compile(&config)),
		Command::Patch(args) => task::run_patch(args),
		Command::Config(args) => args.load().and_then(|config| task::print_config(&config)),
	};

	if let Err(err) = result {
		ceprintln!("<r!><s>Error:</></> {:#}", err);
		std::process::exit(1); // general error
	}
}
