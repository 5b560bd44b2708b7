//! Feature-flag resolution over a remotely-synced snapshot.
//!
//! The remote flag service may silently normalize snake_case keys to
//! camelCase, so every lookup runs a two-step chain:
//!
//! 1. the key verbatim
//! 2. the key transformed snake_case -> camelCase
//! 3. the caller-supplied default
//!
//! Callers stay agnostic of which convention the service picked. The
//! accessor is pure and read-only: the snapshot is a plain parameter
//! owned by the caller, refreshed by an external provider out of scope
//! here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a resolved flag value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagSource {
    /// The key matched verbatim
    Verbatim,
    /// The snake_case -> camelCase transform of the key matched
    CamelCaseFallback,
    /// Neither form matched; the caller default was used
    Default,
}

impl std::fmt::Display for FlagSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagSource::Verbatim => write!(f, "verbatim"),
            FlagSource::CamelCaseFallback => write!(f, "camel-case-fallback"),
            FlagSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved flag value with its source.
#[derive(Debug, Clone)]
pub struct ResolvedFlag<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: FlagSource,
}

/// An in-memory copy of the remote flag mapping at the time of a lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagSnapshot(serde_json::Map<String, Value>);

impl FlagSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from a JSON object string.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Set a flag value (provider-side; the accessor never mutates).
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Number of flags in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no flags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a boolean flag.
    ///
    /// A present value of any non-boolean type counts as "not found"
    /// and falls through the chain.
    pub fn resolve_bool(&self, key: &str, default: bool) -> bool {
        self.resolve_bool_traced(key, default).value
    }

    /// [`Self::resolve_bool`] with source tracking.
    pub fn resolve_bool_traced(&self, key: &str, default: bool) -> ResolvedFlag<bool> {
        if let Some(value) = self.0.get(key).and_then(Value::as_bool) {
            return ResolvedFlag {
                value,
                source: FlagSource::Verbatim,
            };
        }
        if let Some(value) = self.0.get(&snake_to_camel(key)).and_then(Value::as_bool) {
            return ResolvedFlag {
                value,
                source: FlagSource::CamelCaseFallback,
            };
        }
        ResolvedFlag {
            value: default,
            source: FlagSource::Default,
        }
    }

    /// Resolve a flag of any type.
    ///
    /// Unlike [`Self::resolve_bool`], any defined value satisfies a
    /// lookup step regardless of its type.
    pub fn resolve_value(&self, key: &str, default: Value) -> Value {
        self.resolve_value_traced(key, default).value
    }

    /// [`Self::resolve_value`] with source tracking.
    pub fn resolve_value_traced(&self, key: &str, default: Value) -> ResolvedFlag<Value> {
        if let Some(value) = self.0.get(key) {
            return ResolvedFlag {
                value: value.clone(),
                source: FlagSource::Verbatim,
            };
        }
        if let Some(value) = self.0.get(&snake_to_camel(key)) {
            return ResolvedFlag {
                value: value.clone(),
                source: FlagSource::CamelCaseFallback,
            };
        }
        ResolvedFlag {
            value: default,
            source: FlagSource::Default,
        }
    }
}

/// Transform a snake_case key to camelCase: each `_x` becomes the
/// uppercased `x` (`my_flag_name` -> `myFlagName`).
///
/// A key already in camelCase transforms to itself, so the double
/// lookup is idempotent. An underscore not followed by an alphanumeric
/// character is kept as-is.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '_' && chars.peek().is_some_and(|next| next.is_ascii_alphanumeric()) {
            // Consume the following character uppercased.
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(ch);
        }
    }

    out
}
