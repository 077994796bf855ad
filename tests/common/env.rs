//! Test environment builder for isolated icopack runs.
//!
//! Provides `TestEnv` - a temp project directory holding icons, metadata
//! and categories, plus helpers to run the CLI inside it.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::CIRCLE_SVG;

/// Environment variables that would leak host settings into a run
const ISOLATED_VARS: &[&str] = &[
    "ICOPACK_COLOR",
    "ICOPACK_SIZES",
    "ICOPACK_JOBS",
    "ICOPACK_VERBOSITY",
];

/// Result of running an icopack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run icopack from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run icopack from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");

        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute icopack");
        to_result(output)
    }

    /// Write a file below the project root, creating parent directories
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn read_bytes(&self, relative: &str) -> Vec<u8> {
        std::fs::read(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse a manifest written by a run
    pub fn read_manifest(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(relative))
            .unwrap_or_else(|e| panic!("Invalid manifest {}: {}", relative, e))
    }

    /// Names (without extension) of the files with `extension` in `dir`, sorted
    pub fn file_stems(&self, dir: &str, extension: &str) -> Vec<String> {
        let mut stems: Vec<String> = std::fs::read_dir(self.path(dir))
            .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir, e))
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        stems.sort();
        stems
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, Vec<u8>)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add `icons/<name>.svg` with a valid circle icon
    pub fn with_icon(self, name: &str) -> Self {
        self.with_svg(name, CIRCLE_SVG)
    }

    /// Add `icons/<name>.svg` with the given content
    pub fn with_svg(self, name: &str, content: &str) -> Self {
        self.with_file(&format!("icons/{}.svg", name), content)
    }

    /// Add `icons/<name>.json`
    pub fn with_metadata(self, name: &str, json: &str) -> Self {
        self.with_file(&format!("icons/{}.json", name), json)
    }

    /// Add `categories/<name>.json`
    pub fn with_category(self, name: &str) -> Self {
        self.with_file(
            &format!("categories/{}.json", name),
            format!(r#"{{"title": "{}"}}"#, name),
        )
    }

    pub fn with_config(self, toml: &str) -> Self {
        self.with_file("icopack.toml", toml)
    }

    pub fn with_file(mut self, relative: &str, content: impl AsRef<[u8]>) -> Self {
        self.files
            .push((relative.to_string(), content.as_ref().to_vec()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_icopack")),
        };
        for (relative, content) in &self.files {
            env.write_file(relative, content);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

