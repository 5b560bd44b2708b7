//! The UI state store: a single-writer container over [`UiState`].
//!
//! The store is an explicit value the caller owns and threads through -
//! no process-wide singleton. `&mut self` on every mutation keeps the
//! single-writer invariant a compile-time fact; no locking is needed
//! because there is no concurrent writer.
//!
//! Persistence is selective and best-effort: each action documents
//! whether it writes through, and a failed write is logged at warn and
//! swallowed. UI code never sees a storage error.

use tracing::warn;

use crate::state::{Position, ThemeMode, UiState};
use crate::storage::StateBackend;

/// Shared UI shell state with write-through persistence.
pub struct UiStateStore<B: StateBackend> {
    state: UiState,
    backend: B,
}

impl<B: StateBackend> UiStateStore<B> {
    /// Rehydrate a store from the backend.
    ///
    /// A failed or empty read falls back to defaults; this never errors
    /// and never blocks startup.
    pub fn load(backend: B) -> Self {
        let raw = match backend.read() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(location = %backend.location(), error = %e, "ui state read failed, using defaults");
                None
            }
        };
        let state = UiState::rehydrate(raw.as_deref());
        Self { state, backend }
    }

    /// Current state. Callers get a shared reference; mutation goes
    /// through the action methods only.
    pub fn snapshot(&self) -> &UiState {
        &self.state
    }

    /// Move the FAB.
    ///
    /// Always updates memory; writes through only when `persist` is
    /// true. Callers pass false on every intermediate drag-move frame
    /// and true on drag-end, so dragging does not amplify into a write
    /// per frame.
    pub fn set_fab_position(&mut self, position: Position, persist: bool) {
        self.state.fab.position = position;
        if persist {
            self.persist();
        }
    }

    /// Mark a drag as started or finished. Memory only, never persisted.
    pub fn set_fab_dragging(&mut self, is_dragging: bool) {
        self.state.fab.is_dragging = is_dragging;
    }

    /// Show or hide the FAB. Persists.
    pub fn set_fab_visibility(&mut self, is_visible: bool) {
        self.state.fab.is_visible = is_visible;
        self.persist();
    }

    /// Flip the sidebar collapse flag. Persists.
    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar.is_collapsed = !self.state.sidebar.is_collapsed;
        self.persist();
    }

    /// Switch the theme. Persists.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.state.theme.mode = mode;
        self.persist();
    }

    /// Where this store persists to (for display purposes).
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Serialize the whole aggregate and write it through, best-effort.
    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.state) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "ui state serialization failed, skipping persist");
                return;
            }
        };
        if let Err(e) = self.backend.write(&raw) {
            warn!(location = %self.backend.location(), error = %e, "ui state write failed");
        }
    }
}
