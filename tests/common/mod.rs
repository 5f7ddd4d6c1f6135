//! Common test utilities for exclude-list integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source tree plus a manifest location, both in a temporary directory
pub struct TestTree {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Source tree root (`<temp>/src`)
    pub root: PathBuf,
}

impl TestTree {
    /// Create an empty source tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("src");
        std::fs::create_dir_all(&root).expect("Failed to create source root");
        Self { temp, root }
    }

    /// Create an empty file in the source tree
    pub fn touch(&self, rel_path: &str) {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, "").expect("Failed to write file");
    }

    /// Create a directory in the source tree
    #[allow(dead_code)]
    pub fn mkdir(&self, rel_path: &str) {
        std::fs::create_dir_all(self.root.join(rel_path)).expect("Failed to create directory");
    }

    /// Write a manifest next to the source tree and return its path
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.temp.path().join("exclude-list.json");
        std::fs::write(&path, content).expect("Failed to write manifest");
        path
    }

    /// Build a manifest from a list of `rel_path` values
    pub fn manifest_for(&self, rel_paths: &[&str]) -> PathBuf {
        let entries: Vec<serde_json::Value> = rel_paths
            .iter()
            .map(|p| serde_json::json!({ "rel_path": p }))
            .collect();
        let document = serde_json::json!({ "content": entries });
        self.write_manifest(&document.to_string())
    }

    /// Path of a file next to the source tree
    #[allow(dead_code)]
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }
}

/// Command for the exclude-list binary with a clean environment for the given root
#[allow(dead_code)]
pub fn exclude_list_cmd(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("exclude-list").expect("binary is built");
    cmd.env_remove("EXCLUDE_LIST_SOURCE_ROOT")
        .env_remove("EXCLUDE_LIST_TOOL")
        .env_remove("RUST_LOG")
        .arg("--source-root")
        .arg(root);
    cmd
}
