//! Storage backend trait and implementations.
//!
//! This module provides the backends for the single-key UI state blob:
//! - `FileBackend` - one JSON file under the data directory (default)
//! - `MemoryBackend` - in-process storage for tests and embedding

use crate::Result;
use std::fs;
use std::path::PathBuf;

/// Trait for backends that hold the raw UI state blob.
///
/// The blob is opaque text to the backend; serialization lives with the
/// store. `read` returning `Ok(None)` means "nothing persisted yet" and
/// is not an error.
pub trait StateBackend {
    /// Read the raw blob, if one has been written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the raw blob.
    fn write(&mut self, raw: &str) -> Result<()>;

    /// Get the storage location description (for display purposes).
    fn location(&self) -> String;
}

/// File-based backend: one JSON file under the data directory.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend writing to the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a backend at the default location
    /// (`BSH_DATA_DIR` > XDG data dir, file `ui-state.json`).
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(super::state_file_path(None)?))
    }
}

impl StateBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory backend for tests and disk-less embedding.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    raw: Option<String>,
}

impl MemoryBackend {
    /// Create an empty backend (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a blob.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// Inspect the last written blob without going through the trait.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.raw.clone())
    }

    fn write(&mut self, raw: &str) -> Result<()> {
        self.raw = Some(raw.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
