use crate::config::{self, BuildConfig, CLOSURE_COMPILER_ARTIFACT, CLOSURE_COMPILER_VERSION};
use crate::types::*;
use std::ffi::OsString;
use std::fs::create_dir_all;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use color_print::*;

#[derive(clap::Args, Clone, Debug, Default)]
pub struct Args {
	#[clap(flatten)]
	config: config::Args,

	/// Override the configured compilation level
	#[arg(short = 'l', long, value_enum)]
	compilation_level: Option<CompilationLevel>,
}

impl Args {
	pub fn load(&self) -> anyhow::Result<BuildConfig> {
		let mut config = self.config.load()?;
		self.apply(&mut config);
		Ok(config)
	}

	fn apply(&self, config: &mut BuildConfig) {
		if let Some(level) = self.compilation_level {
			config.compilation_level = level;
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
	#[error("Couldn't launch \"{program}\"")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},

	#[error(
		"Closure Compiler jar \"{}\" not found. Download {}:{} into that path, or set `compiler.jar` or `compiler.command` in the build config.",
		.0.display(), CLOSURE_COMPILER_ARTIFACT, CLOSURE_COMPILER_VERSION
	)]
	MissingJar(PathBuf),

	#[error("Closure Compiler failed ({0})")]
	Failed(ExitStatus),

	#[error("Closure Compiler reported success but did not write \"{}\"", .0.display())]
	NoOutput(PathBuf),

	#[error("Couldn't create output directory \"{dir}\"")]
	OutputDir {
		dir: String,
		#[source]
		source: io::Error,
	},
}

/// Closure Compiler flags, in the order they are passed.
pub fn arguments(config: &BuildConfig) -> Vec<String> {
	let source_dir = &config.source_dir;
	let artifact = format!("{}/{}", config.output_dir, config.output_js);

	let mut args = vec![
		"--compilation_level".into(), config.compilation_level.to_string(),
		"--js".into(), format!("{}/*.js", source_dir),
		"--js_output_file".into(), artifact.clone(),
		"--create_source_map".into(), format!("{}.map", artifact),
		"--source_map_location_mapping".into(), format!("{}|../{}", source_dir, source_dir),
		"--language_in".into(), config.language_in.to_string(),
		"--language_out".into(), config.language_out.to_string(),
		"--output_wrapper".into(), config.output_wrapper(),
	];

	args.extend(config.warnings.iter().map(|class| format!("--jscomp_warning={}", class)));
	args
}

/// Program and leading arguments used to launch the compiler.
pub fn launcher(config: &BuildConfig) -> (OsString, Vec<OsString>) {
	match &config.compiler.command {
		Some(command) if !command.is_empty() => (
			command[0].clone().into(),
			command[1..].iter().map(OsString::from).collect(),
		),
		_ => (
			config.compiler.java.clone().into(),
			vec!["-jar".into(), config.compiler.jar.clone().into_os_string()],
		),
	}
}

pub fn command(config: &BuildConfig) -> Command {
	let (program, prefix) = launcher(config);

	let mut command = Command::new(program);
	command.args(prefix).args(arguments(config));
	command
}

/// Run the compiler, blocking until it exits. Its output is inherited.
pub fn run(config: &BuildConfig) -> Result<(), CompilerError> {
	if config.compiler.command.is_none() && !config.compiler.jar.is_file() {
		return Err(CompilerError::MissingJar(config.compiler.jar.clone()));
	}

	create_dir_all(&config.output_dir).map_err(|source| CompilerError::OutputDir {
		dir: config.output_dir.clone(),
		source,
	})?;

	let mut command = command(config);
	let program = command.get_program().to_string_lossy().into_owned();

	cprintln!("<b!>Compiling:</> <w>{}", display_command(&command));

	let status = command.status().map_err(|source| CompilerError::Spawn { program, source })?;

	if !status.success() {
		return Err(CompilerError::Failed(status));
	}

	for path in [config.artifact_path(), config.map_path()] {
		if !path.is_file() {
			return Err(CompilerError::NoOutput(path));
		}
	}

	cprintln!("<g!>Compiled</> <s>{}", config.artifact_path().display());
	Ok(())
}

fn display_command(command: &Command) -> String {
	std::iter::once(command.get_program())
		.chain(command.get_args())
		.map(|arg| {
			let arg = arg.to_string_lossy();

			if arg.contains(|c: char| c.is_whitespace() || c == '*' || c == '|') {
				format!("{:?}", arg)
			} else {
				arg.into_owned()
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
