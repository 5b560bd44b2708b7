//! Durable storage for the UI shell state.
//!
//! The whole aggregate lives under a single key, serialized as JSON text.
//! Two backends implement that key:
//!
//! - [`FileBackend`] (default): one file at `<data-dir>/ui-state.json`,
//!   where the data dir is `BSH_DATA_DIR` if set, else the XDG data dir
//!   (`~/.local/share/bestshot/`).
//! - [`MemoryBackend`]: in-process, for tests and disk-less embedding.
//!
//! Reads happen once, at rehydration. Writes are best-effort: the store
//! logs and swallows failures rather than surfacing them to UI code.

pub mod backend;

pub use backend::{FileBackend, MemoryBackend, StateBackend};

use crate::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "BSH_DATA_DIR";

/// File name of the persisted UI state blob.
pub const STATE_FILE: &str = "ui-state.json";

/// Resolve the data directory: `BSH_DATA_DIR` > XDG data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))?;

    Ok(data_dir.join("bestshot"))
}

/// Resolve the full path of the persisted UI state file.
///
/// An explicit directory (e.g. from a CLI flag) bypasses env/XDG lookup.
pub fn state_file_path(explicit_dir: Option<&std::path::Path>) -> Result<PathBuf> {
    let dir = match explicit_dir {
        Some(dir) => dir.to_path_buf(),
        None => data_dir()?,
    };
    Ok(dir.join(STATE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Path Resolution Tests ====================

    #[test]
    fn test_state_file_path_explicit_dir() {
        let path = state_file_path(Some(std::path::Path::new("/tmp/bsh-test"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/bsh-test/ui-state.json"));
    }

    #[test]
    #[serial_test::serial]
    fn test_data_dir_env_override() {
        // SAFETY: set_var is not thread-safe on POSIX; #[serial] keeps
        // env-mutating tests from interleaving.
        unsafe { env::set_var(DATA_DIR_ENV, "/tmp/bsh-env-dir") };

        let dir = data_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/bsh-env-dir"));

        unsafe { env::remove_var(DATA_DIR_ENV) };
    }

    #[test]
    #[serial_test::serial]
    fn test_data_dir_falls_back_to_xdg() {
        unsafe { env::remove_var(DATA_DIR_ENV) };

        let dir = data_dir().unwrap();
        assert!(dir.ends_with("bestshot"));
    }
}
