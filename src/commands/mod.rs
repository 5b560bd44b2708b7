//! Command implementations for the `bsh` CLI.
//!
//! Each command builds a serializable output struct; `main` decides
//! whether to render it as JSON (default) or human-readable text.
//! State commands open the file backend, apply exactly one store
//! action, and report the resulting snapshot.

use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::env::{AuthAdapter, BUILD_TIMESTAMP, EnvironmentMode, GIT_COMMIT};
use crate::flags::{FlagSnapshot, ResolvedFlag};
use crate::state::{Position, ThemeMode, UiState, UiStateStore};
use crate::storage::{FileBackend, state_file_path};
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Snapshot of the UI state plus where it persists.
#[derive(Debug, Serialize)]
pub struct StateOutput {
    pub state: UiState,
    pub storage: String,
}

impl CommandResult for StateOutput {
    fn to_human(&self) -> String {
        let fab = &self.state.fab;
        format!(
            "fab: ({}, {}) visible={} dragging={}\nsidebar: collapsed={}\ntheme: {}\nstorage: {}",
            fab.position.x,
            fab.position.y,
            fab.is_visible,
            fab.is_dragging,
            self.state.sidebar.is_collapsed,
            self.state.theme.mode,
            self.storage,
        )
    }
}

/// Result of one flag resolution.
#[derive(Debug, Serialize)]
pub struct FlagOutput {
    pub key: String,
    pub value: serde_json::Value,
    pub source: crate::flags::FlagSource,
}

impl CommandResult for FlagOutput {
    fn to_human(&self) -> String {
        format!("{} = {} (from {})", self.key, self.value, self.source)
    }
}

/// Deployment environment report.
#[derive(Debug, Serialize)]
pub struct EnvOutput {
    pub mode: EnvironmentMode,
    pub auth_strategy: crate::env::AuthStrategy,
    pub build_timestamp: &'static str,
    pub git_commit: &'static str,
}

impl CommandResult for EnvOutput {
    fn to_human(&self) -> String {
        format!(
            "mode: {}\nauth: {}\nbuilt: {} ({})",
            self.mode, self.auth_strategy, self.build_timestamp, self.git_commit,
        )
    }
}

fn open_store(data_dir: Option<&Path>) -> Result<UiStateStore<FileBackend>> {
    let path = state_file_path(data_dir)?;
    Ok(UiStateStore::load(FileBackend::new(path)))
}

fn state_output(store: &UiStateStore<FileBackend>) -> StateOutput {
    StateOutput {
        state: store.snapshot().clone(),
        storage: store.location(),
    }
}

/// Show the rehydrated state without mutating anything.
pub fn state_show(data_dir: Option<&Path>) -> Result<StateOutput> {
    let store = open_store(data_dir)?;
    Ok(state_output(&store))
}

/// Set the theme mode and persist.
pub fn state_set_theme(data_dir: Option<&Path>, mode: &str) -> Result<StateOutput> {
    let mode = ThemeMode::parse(mode)
        .ok_or_else(|| Error::InvalidInput(format!("unknown theme mode: {}", mode)))?;

    let mut store = open_store(data_dir)?;
    store.set_theme(mode);
    Ok(state_output(&store))
}

/// Flip the sidebar collapse flag and persist.
pub fn state_toggle_sidebar(data_dir: Option<&Path>) -> Result<StateOutput> {
    let mut store = open_store(data_dir)?;
    store.toggle_sidebar();
    Ok(state_output(&store))
}

/// Move the FAB, writing through only when `persist` is set.
pub fn state_set_fab_position(
    data_dir: Option<&Path>,
    x: f64,
    y: f64,
    persist: bool,
) -> Result<StateOutput> {
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::InvalidInput(format!(
            "position must be finite, got ({}, {})",
            x, y
        )));
    }

    let mut store = open_store(data_dir)?;
    store.set_fab_position(Position { x, y }, persist);
    Ok(state_output(&store))
}

/// Show or hide the FAB and persist.
pub fn state_set_fab_visible(data_dir: Option<&Path>, visible: bool) -> Result<StateOutput> {
    let mut store = open_store(data_dir)?;
    store.set_fab_visibility(visible);
    Ok(state_output(&store))
}

/// Resolve a boolean flag against a snapshot file.
pub fn flags_resolve(snapshot_path: &Path, key: &str, default: bool) -> Result<FlagOutput> {
    let raw = fs::read_to_string(snapshot_path)?;
    let snapshot = FlagSnapshot::from_json(&raw)?;

    let ResolvedFlag { value, source } = snapshot.resolve_bool_traced(key, default);
    Ok(FlagOutput {
        key: key.to_string(),
        value: json!(value),
        source,
    })
}

/// Report the resolved deployment environment.
pub fn env_show() -> EnvOutput {
    let mode = EnvironmentMode::from_env();
    let adapter = AuthAdapter::for_mode(mode);
    EnvOutput {
        mode,
        auth_strategy: adapter.strategy(),
        build_timestamp: BUILD_TIMESTAMP,
        git_commit: GIT_COMMIT,
    }
}
