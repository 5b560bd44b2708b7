//! Common test utilities for bestshot integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pollute
//! the user's `~/.local/share/bestshot/` directory.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with an isolated data directory.
///
/// The `bsh()` method returns a `Command` that sets `BSH_DATA_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub data_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated data directory.
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the bsh binary with isolated data directory.
    pub fn bsh(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bsh"));
        cmd.env("BSH_DATA_DIR", self.data_dir.path());
        cmd.env_remove("BSH_MODE");
        cmd
    }

    /// Get the path to the data directory.
    pub fn data_path(&self) -> &std::path::Path {
        self.data_dir.path()
    }

    /// Path of the persisted UI state file.
    pub fn state_file(&self) -> std::path::PathBuf {
        self.data_path().join("ui-state.json")
    }

    /// Read the raw persisted blob, if any.
    pub fn read_state_blob(&self) -> Option<String> {
        std::fs::read_to_string(self.state_file()).ok()
    }

    /// Write a raw blob directly into the state file.
    pub fn write_state_blob(&self, raw: &str) {
        std::fs::write(self.state_file(), raw).unwrap();
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse JSON output from a command.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}
