use crate::types::*;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "swb-build.toml";

pub const CLOSURE_COMPILER_VERSION: &str = "v20201102";

pub const CLOSURE_COMPILER_ARTIFACT: &str = "com.google.javascript:closure-compiler";

#[derive(clap::Args, Clone, Debug, Default)]
#[group(id = "ConfigArgs")]
pub struct Args {
	/// Build config file [default: swb-build.toml, if present]
	#[arg(short, long)]
	config: Option<PathBuf>,
}

impl Args {
	pub fn load(&self) -> Result<BuildConfig> {
		BuildConfig::load(self.config.as_deref())
	}
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
	pub source_dir: String,
	pub output_dir: String,
	pub output_js: String,
	pub namespace: String,
	pub wrapper_begin: String,
	pub compilation_level: CompilationLevel,
	pub language_in: LanguageMode,
	pub language_out: LanguageMode,
	pub warnings: Vec<String>,
	/// HTML files embedding a copy of the compiled library, relative to the working directory
	pub targets: Vec<String>,
	/// Warn instead of failing when a target lacks the embedded snippet
	pub allow_missing_snippet: bool,
	pub compiler: CompilerConfig,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
	pub java: String,
	pub jar: PathBuf,
	/// Replaces `java -jar <jar>` entirely, e.g. `["npx", "google-closure-compiler"]`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub command: Option<Vec<String>>,
}

impl Default for BuildConfig {
	fn default() -> Self {
		Self {
			source_dir: "src/main/js".into(),
			output_dir: "dist".into(),
			output_js: "shader-web-background.min.js".into(),
			namespace: "shaderWebBackground".into(),
			wrapper_begin: "// -- https://xemantic.github.io/shader-web-background/".into(),
			compilation_level: CompilationLevel::Advanced,
			language_in: LanguageMode::Ecmascript6,
			language_out: LanguageMode::Ecmascript6,
			warnings: [
				"accessControls",
				"checkRegExp",
				"constantProperty",
				"const",
				"deprecatedAnnotations",
				"deprecated",
				"missingProperties",
				"missingReturn",
				"reportUnknownTypes",
				"strictCheckTypes",
				"typeInvalidation",
				"undefinedNames",
				"unusedLocalVariables",
				"unusedPrivateMembers",
				"visibility",
			].map(String::from).into(),
			targets: vec!["index.html".into(), "demo/minimal.html".into()],
			allow_missing_snippet: false,
			compiler: CompilerConfig::default(),
		}
	}
}

impl Default for CompilerConfig {
	fn default() -> Self {
		let jar = dirs::cache_dir()
			.unwrap_or_else(|| PathBuf::from("."))
			.join(env!("CARGO_PKG_NAME"))
			.join(format!("closure-compiler-{}.jar", CLOSURE_COMPILER_VERSION));

		Self {
			java: "java".into(),
			jar,
			command: None,
		}
	}
}

impl BuildConfig {
	/// Load an explicit config file, or the default one if present, or fall back to defaults.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Self::from_file(path),
			None => {
				let default_path = Path::new(DEFAULT_CONFIG_FILE);

				if default_path.is_file() {
					Self::from_file(default_path)
				} else {
					Ok(Self::default())
				}
			}
		}
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let text = read_to_string(path)
			.with_context(|| format!("Couldn't read config file \"{}\"", path.display()))?;

		let config: Self = toml::from_str(&text)
			.with_context(|| format!("Invalid config file \"{}\"", path.display()))?;

		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.output_js.is_empty() {
			return Err(anyhow!("`output_js` must not be empty"));
		}

		if self.wrapper_begin.is_empty() {
			return Err(anyhow!("`wrapper_begin` must not be empty"));
		}

		if matches!(&self.compiler.command, Some(command) if command.is_empty()) {
			return Err(anyhow!("`compiler.command` must name a program"));
		}

		Ok(())
	}

	pub fn output_js_map(&self) -> String {
		format!("{}.map", self.output_js)
	}

	pub fn wrapper_end(&self) -> String {
		format!("//# sourceMappingURL={}", self.output_js_map())
	}

	/// The `--output_wrapper` template; `%output%` is substituted by the compiler.
	pub fn output_wrapper(&self) -> String {
		format!(
			"{}\nconst {}={{}};(()=>{{%output%}})()\n{}",
			self.wrapper_begin,
			self.namespace,
			self.wrapper_end(),
		)
	}

	pub fn artifact_path(&self) -> PathBuf {
		Path::new(&self.output_dir).join(&self.output_js)
	}

	pub fn map_path(&self) -> PathBuf {
		Path::new(&self.output_dir).join(self.output_js_map())
	}

	pub fn to_toml(&self) -> Result<String> {
		toml::to_string(self).map_err(|e| e.into())
	}
}
