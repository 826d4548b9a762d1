//! Shared harness for swb-build CLI tests.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::Path;

pub const BEGIN: &str = "// -- https://xemantic.github.io/shader-web-background/";
pub const MAP: &str = "shader-web-background.min.js.map";

/// Stands in for Closure Compiler: records its arguments and writes the outputs
/// using the `--output_wrapper` it was given.
const FAKE_COMPILER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > compiler-args.txt
while [ $# -gt 0 ]; do
	case "$1" in
		--js_output_file) out="$2"; shift ;;
		--create_source_map) map="$2"; shift ;;
		--output_wrapper) wrapper="$2"; shift ;;
	esac
	shift
done
printf '%s\n' "$wrapper" | sed 's/%output%/var a=1;/' > "$out"
printf '{"version":3}\n' > "$map"
"#;

/// An isolated working directory laid out like the library repository.
#[allow(dead_code)]
pub struct TestContext {
	root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
	pub fn new() -> Self {
		let root = TempDir::new().expect("Failed to create temp directory for tests");
		root.child("fake-closure.sh").write_str(FAKE_COMPILER).unwrap();

		Self { root }
	}

	pub fn path(&self) -> &Path {
		self.root.path()
	}

	pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
		self.root.child(path)
	}

	/// Build a command invoking the `swb-build` binary in the working directory.
	pub fn cli(&self) -> Command {
		let mut cmd = Command::cargo_bin("swb-build").expect("Failed to locate swb-build binary");
		cmd.current_dir(self.path());
		cmd
	}

	pub fn write_config(&self, toml: &str) {
		self.child("swb-build.toml").write_str(toml).unwrap();
	}

	/// Config running the fake compiler through `sh`.
	pub fn use_fake_compiler(&self) {
		self.write_config("[compiler]\ncommand = [\"sh\", \"fake-closure.sh\"]\n");
	}

	/// The compiled output the fake compiler would produce.
	pub fn write_artifact(&self) {
		self.child("dist/shader-web-background.min.js").write_str(&artifact()).unwrap();
		self.child(&format!("dist/{MAP}")).write_str("{\"version\":3}\n").unwrap();
	}

	/// Write both demo pages embedding a stale copy of the library.
	pub fn write_pages(&self) {
		self.child("index.html").write_str(&page(&stale_snippet())).unwrap();
		self.child("demo/minimal.html").write_str(&page(&stale_snippet())).unwrap();
	}

	pub fn read(&self, path: &str) -> String {
		std::fs::read_to_string(self.path().join(path)).unwrap()
	}
}

pub fn artifact() -> String {
	format!("{BEGIN}\nconst shaderWebBackground={{}};(()=>{{var a=1;}})()\n//# sourceMappingURL={MAP}\n")
}

pub fn stale_snippet() -> String {
	format!("{BEGIN}\nconst shaderWebBackground={{}};(()=>{{old()}})()\n//# sourceMappingURL={MAP}\n")
}

pub fn page(snippet: &str) -> String {
	format!("<!DOCTYPE html>\n<html>\n<head>\n<script>\n{snippet}</script>\n</head>\n<body></body>\n</html>\n")
}
