#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temp-dir fixture for integration tests: drop Solidity sources and
/// config files into an isolated directory and point the binary at them.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory and
    /// returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a Solidity source file and returns its path.
    pub fn create_contract(&self, relative_path: &str, source: &str) -> PathBuf {
        self.create_file(relative_path, source)
    }

    /// Creates a solsniff config file and returns its path.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".solsniff.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A contract that triggers none of the builtin rules.
pub const CLEAN_CONTRACT: &str = "contract C {\n  uint x;\n}\n";

/// The five-line reentrancy sample: call.value() on line 3, nothing else.
pub const CALL_VALUE_CONTRACT: &str =
    "contract C {\n  function f() {\n    msg.sender.call.value(1)();\n  }\n}\n";
