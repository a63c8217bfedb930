//! Test support utilities for pgscaffold integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated temp workspace.
///
/// The workspace mirrors the expected layout: the scaffold runs in
/// `<tmp>/pg-docker/postgresql` and the sibling project lives in
/// `<tmp>/site`. Child processes use `.current_dir()` so tests can run in
/// parallel.
pub struct Test {
    /// Temporary workspace
    pub dir: TempDir,
}

impl Test {
    /// Create a workspace with the scaffold root and the sibling project.
    pub fn new() -> Self {
        let t = Self::bare();
        fs::create_dir_all(t.root()).expect("failed to create scaffold root");
        fs::create_dir_all(t.site()).expect("failed to create site dir");
        t
    }

    /// Create a workspace with the scaffold root only (no sibling project).
    pub fn without_site() -> Self {
        let t = Self::bare();
        fs::create_dir_all(t.root()).expect("failed to create scaffold root");
        t
    }

    fn bare() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Directory the scaffold writes into.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("pg-docker").join("postgresql")
    }

    /// Sibling project directory.
    pub fn site(&self) -> PathBuf {
        self.dir.path().join("site")
    }

    /// Sibling project env file.
    pub fn site_env(&self) -> PathBuf {
        self.site().join(".env")
    }

    /// Path inside the scaffold root.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root().join(rel)
    }

    /// Read a file inside the scaffold root.
    pub fn read(&self, rel: impl AsRef<Path>) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    }

    /// Write a file inside the scaffold root.
    pub fn write(&self, rel: impl AsRef<Path>, content: &str) {
        fs::write(self.path(rel), content).expect("failed to write file");
    }

    /// Sorted entry names of the scaffold root.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .expect("failed to read root")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
