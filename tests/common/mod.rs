//! Shared testing utilities for weft CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `weft` binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("weft").expect("Failed to locate weft binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to weft.toml in the project directory.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("weft.toml")
    }

    /// Path to the emitted tailwind.config.js.
    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join("tailwind.config.js")
    }

    /// Path to the managed outputs manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.work_dir.join(".weft-managed.toml")
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read weft.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write weft.toml")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read tailwind.config.js")
    }

    pub fn write_output(&self, content: &str) {
        fs::write(self.output_path(), content).expect("Failed to write tailwind.config.js")
    }

    pub fn assert_config_exists(&self) {
        assert!(self.config_path().exists(), "weft.toml should exist");
    }

    pub fn assert_output_exists(&self) {
        assert!(self.output_path().exists(), "tailwind.config.js should exist");
    }

    /// Execute a closure after temporarily switching into the project directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Restore original CWD first (in case we're still in the temp dir)
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
