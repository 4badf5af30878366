//! Shared testing utilities for prompt-architect CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated home and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    home: PathBuf,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let home = root.path().join("home");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&home).expect("Failed to create test home directory");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, home, work_dir }
    }

    /// The prompt-architect home used by every CLI invocation.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary with no API key in its environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prompt-architect").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir)
            .env("PROMPT_ARCHITECT_HOME", &self.home)
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like [`TestContext::cli`], with an API key set.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", "test-key");
        cmd
    }

    /// Write `config.toml` into the home directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.home.join("config.toml"), content).expect("Failed to write config.toml");
    }

    /// Point the Gemini client at a local mock server.
    pub fn use_api_url(&self, url: &str) {
        self.write_config(&format!("[gemini]\napi_url = \"{}\"\ntimeout_secs = 5\n", url));
    }

    /// Parsed `history.json`, or an empty list when it does not exist yet.
    pub fn history(&self) -> Vec<serde_json::Value> {
        let path = self.home.join("history.json");
        if !path.exists() {
            return Vec::new();
        }
        let content = fs::read_to_string(path).expect("Failed to read history.json");
        serde_json::from_str(&content).expect("history.json should be a JSON array")
    }

    /// Files in the working directory with the given extension.
    pub fn work_files_with_extension(&self, extension: &str) -> Vec<PathBuf> {
        fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .collect()
    }
}
