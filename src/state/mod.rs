//! UI shell state for the Best Shot client.
//!
//! This module defines the persisted aggregate and its rehydration rules:
//!
//! - `fab` - floating action button position, drag flag, visibility
//! - `sidebar` - collapse flag
//! - `theme` - light/dark mode
//!
//! ## Persisted format
//!
//! The aggregate is stored under a single key as JSON:
//!
//! ```json
//! {
//!   "fab": {"position": {"x": 24.0, "y": 24.0}, "isDragging": false, "isVisible": true},
//!   "sidebar": {"isCollapsed": false},
//!   "theme": {"mode": "dark"}
//! }
//! ```
//!
//! There is no version field. Schema evolution relies on the per-field
//! merge in [`UiState::rehydrate`]: each top-level field's stored
//! sub-object is merged over that field's defaults independently, so a
//! blob written by an older build never wipes out a newly added field.

pub mod store;

pub use store::UiStateStore;

use serde::{Deserialize, Serialize};

/// A 2D point in viewport coordinates.
///
/// The store does not clamp; consumers clamp to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Floating action button state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabState {
    /// Current position of the FAB.
    pub position: Position,

    /// Whether a drag is in progress. Transient: never persisted, and
    /// always `false` immediately after rehydration.
    pub is_dragging: bool,

    /// Whether the FAB is shown at all.
    pub is_visible: bool,
}

impl Default for FabState {
    fn default() -> Self {
        Self {
            position: Position { x: 24.0, y: 24.0 },
            is_dragging: false,
            is_visible: true,
        }
    }
}

/// Sidebar state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub is_collapsed: bool,
}

/// Theme state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light color scheme
    Light,
    /// Dark color scheme (default)
    #[default]
    Dark,
}

impl ThemeMode {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The whole UI shell aggregate. One instance per application session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub fab: FabState,
    pub sidebar: SidebarState,
    pub theme: ThemeState,
}

/// Partial shape used on the rehydration read path.
///
/// Every field is optional so a blob from any prior (or future) build
/// deserializes without error; whatever is present merges over defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialUiState {
    fab: Option<PartialFab>,
    sidebar: Option<PartialSidebar>,
    theme: Option<PartialTheme>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PartialFab {
    position: Option<Position>,
    is_visible: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PartialSidebar {
    is_collapsed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialTheme {
    mode: Option<ThemeMode>,
}

impl UiState {
    /// Reconstruct state from a raw storage blob.
    ///
    /// Absent or unparsable input falls back to defaults without
    /// surfacing an error; rehydration must never block startup.
    /// Present fields win over defaults, absent fields keep defaults,
    /// decided per top-level field independently.
    ///
    /// `fab.isDragging` is transient and is not read back even when the
    /// blob contains it (e.g. hand-edited storage): a session never
    /// starts mid-drag.
    pub fn rehydrate(raw: Option<&str>) -> Self {
        let mut state = Self::default();

        let Some(raw) = raw else {
            return state;
        };

        let partial: PartialUiState = match serde_json::from_str(raw) {
            Ok(partial) => partial,
            Err(e) => {
                tracing::debug!(error = %e, "discarding unparsable ui state blob");
                return state;
            }
        };

        if let Some(fab) = partial.fab {
            if let Some(position) = fab.position {
                state.fab.position = position;
            }
            if let Some(is_visible) = fab.is_visible {
                state.fab.is_visible = is_visible;
            }
        }

        if let Some(sidebar) = partial.sidebar {
            if let Some(is_collapsed) = sidebar.is_collapsed {
                state.sidebar.is_collapsed = is_collapsed;
            }
        }

        if let Some(theme) = partial.theme {
            if let Some(mode) = theme.mode {
                state.theme.mode = mode;
            }
        }

        state
    }
}
