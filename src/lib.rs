//! Bestshot - the client-side core of the Best Shot app.
//!
//! This library provides the non-visual core the UI shell embeds:
//! persisted UI shell state (FAB, sidebar, theme), feature-flag
//! resolution over a remotely-synced snapshot, and deployment-mode
//! keyed authentication adapters. It also backs the `bsh` debug CLI.

pub mod cli;
pub mod commands;
pub mod env;
pub mod flags;
pub mod state;
pub mod storage;


/// Library-level error type for Bestshot operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Bestshot operations.
pub type Result<T> = std::result::Result<T, Error>;
