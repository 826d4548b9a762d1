use std::fs::{read_to_string, write};
use std::io;
use std::path::{Path, PathBuf};
use regex::{NoExpand, Regex};

const BACK_PATH_SEGMENT: &str = "../";

#[derive(Debug, thiserror::Error)]
pub enum RelocateError {
	#[error("Compiled artifact \"{}\" not found. Run the compile step first.", .0.display())]
	MissingArtifact(PathBuf),

	#[error("Compiled artifact \"{}\" never mentions \"{token}\"", .path.display())]
	MissingToken {
		path: PathBuf,
		token: String,
	},

	#[error("No embedded snippet found in \"{}\"", .0.display())]
	NoMatchFound(PathBuf),

	#[error("Couldn't {action} \"{}\"", .path.display())]
	Io {
		action: &'static str,
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Invalid snippet boundaries: {0}")]
	Pattern(#[from] regex::Error),
}

pub type Result<T, E = RelocateError> = std::result::Result<T, E>;

pub fn depth(target: &str) -> usize {
	target.chars().filter(|&c| c == '/').count()
}

pub fn back_path(target: &str) -> String {
	BACK_PATH_SEGMENT.repeat(depth(target))
}

pub fn relocate(snippet: &str, target: &str, output_dir: &str, token: &str) -> String {
	snippet.replacen(token, &format!("{}{}/{}", back_path(target), output_dir, token), 1)
}

// the end marker is the source map name, so relocated pages still match
#[derive(Clone, Debug)]
pub struct SnippetRegion {
	pattern: Regex,
}

impl SnippetRegion {
	pub fn new(begin: &str, end: &str) -> Result<Self> {
		let pattern = Regex::new(&format!(
			"(?s){}.*{}\n",
			regex::escape(begin),
			regex::escape(end),
		))?;

		Ok(Self { pattern })
	}

	pub fn is_match(&self, text: &str) -> bool {
		self.pattern.is_match(text)
	}

	/// Returns `None` when `text` holds no region.
	pub fn replace_first(&self, text: &str, snippet: &str) -> Option<String> {
		if !self.is_match(text) {
			return None;
		}

		// the region always ends with a line break, keep it even if the snippet doesn't
		let replacement = if snippet.ends_with('\n') {
			snippet.to_string()
		} else {
			format!("{}\n", snippet)
		};

		Some(self.pattern.replace(text, NoExpand(&replacement)).into_owned())
	}
}

#[derive(Debug)]
pub struct Relocator {
	region: SnippetRegion,
	snippet: String,
	output_dir: String,
	token: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
	Patched,
	Unchanged,
	Skipped,
}

impl Relocator {
	pub fn new(region: SnippetRegion, snippet: impl Into<String>, output_dir: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			region,
			snippet: snippet.into(),
			output_dir: output_dir.into(),
			token: token.into(),
		}
	}

	pub fn from_artifact(region: SnippetRegion, artifact: &Path, companions: &[&Path], output_dir: &str, token: &str) -> Result<Self> {
		for path in std::iter::once(artifact).chain(companions.iter().copied()) {
			if !path.is_file() {
				return Err(RelocateError::MissingArtifact(path.to_path_buf()));
			}
		}

		let snippet = read_to_string(artifact).map_err(|source| RelocateError::Io {
			action: "read",
			path: artifact.to_path_buf(),
			source,
		})?;

		if !snippet.contains(token) {
			return Err(RelocateError::MissingToken {
				path: artifact.to_path_buf(),
				token: token.into(),
			});
		}

		Ok(Self::new(region, snippet, output_dir, token))
	}

	pub fn snippet_for(&self, target: &str) -> String {
		relocate(&self.snippet, target, &self.output_dir, &self.token)
	}

	pub fn patch(&self, target: &str, allow_missing: bool) -> Result<Outcome> {
		self.patch_in(Path::new(""), target, allow_missing)
	}

	/// The relocation depth is taken from `target` alone, not from `root`.
	pub fn patch_in(&self, root: &Path, target: &str, allow_missing: bool) -> Result<Outcome> {
		let path = root.join(target);

		let text = read_to_string(&path).map_err(|source| RelocateError::Io {
			action: "read",
			path: path.clone(),
			source,
		})?;

		let Some(patched) = self.region.replace_first(&text, &self.snippet_for(target)) else {
			return if allow_missing {
				Ok(Outcome::Skipped)
			} else {
				Err(RelocateError::NoMatchFound(path))
			};
		};

		if patched == text {
			return Ok(Outcome::Unchanged);
		}

		write(&path, patched).map_err(|source| RelocateError::Io {
			action: "write",
			path,
			source,
		})?;

		Ok(Outcome::Patched)
	}
}
