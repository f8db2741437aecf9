//! Shared helpers for confsweep integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding a template and receiving generated output.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Writes `content` to `input.txt` in the scratch directory.
    pub fn write_template(&self, content: &str) -> PathBuf {
        let path = self.root().join("input.txt");
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Sorted names of generated combination directories.
    pub fn generated_dirs(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.output_dir())
            .expect("Failed to read output directory")
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Command running the compiled binary inside the scratch directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("confsweep").expect("Failed to locate confsweep binary");
        cmd.current_dir(self.root());
        cmd
    }
}
