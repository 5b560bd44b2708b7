//! Deployment mode resolution and authentication adapters.
//!
//! The mode is fixed for the process lifetime: read once at startup
//! from `BSH_MODE`, falling back to the default baked in by `build.rs`.
//! Each mode maps onto exactly one authentication strategy through an
//! exhaustive match, so an incomplete table is a compile error, not a
//! runtime case to guard.
//!
//! `local-dev` and `demo` use the bypass strategy: every session counts
//! as authenticated, trust intentionally disabled for local work and
//! public demo deployments. `staging` and `production` go through a
//! real identity provider, reached via the [`IdentityGateway`] seam.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Result;

/// Environment variable selecting the deployment mode.
pub const MODE_ENV: &str = "BSH_MODE";

/// Deployment mode baked in at build time (see `build.rs`).
pub const DEFAULT_MODE: &str = env!("BSH_DEFAULT_MODE");

/// ISO 8601 timestamp of when this binary was built.
pub const BUILD_TIMESTAMP: &str = env!("BSH_BUILD_TIMESTAMP");

/// Short git commit hash of the build, or "unknown".
pub const GIT_COMMIT: &str = env!("BSH_GIT_COMMIT");

/// Where a deployment is running. Closed set, fixed per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvironmentMode {
    /// Developer workstation
    LocalDev,
    /// Public demo deployment
    Demo,
    /// Pre-production
    Staging,
    /// Production
    Production,
}

impl EnvironmentMode {
    /// Parse from the canonical kebab-case string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "local-dev" => Some(Self::LocalDev),
            "demo" => Some(Self::Demo),
            "staging" => Some(Self::Staging),
            "production" => Some(Self::Production),
            _ => None,
        }
    }

    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalDev => "local-dev",
            Self::Demo => "demo",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Resolve the mode for this process: `BSH_MODE` > build-time
    /// default > `local-dev`. An unrecognized value in either source
    /// falls through with a warning rather than failing startup.
    pub fn from_env() -> Self {
        if let Ok(raw) = std::env::var(MODE_ENV) {
            match Self::parse(&raw) {
                Some(mode) => return mode,
                None => warn!(value = %raw, "unrecognized {MODE_ENV}, falling back to build default"),
            }
        }
        Self::parse(DEFAULT_MODE).unwrap_or(Self::LocalDev)
    }

    /// The authentication strategy bound to this mode. Total over the
    /// closed enum.
    pub fn auth_strategy(self) -> AuthStrategy {
        match self {
            Self::LocalDev | Self::Demo => AuthStrategy::Bypass,
            Self::Staging | Self::Production => AuthStrategy::IdentityProvider,
        }
    }
}

impl std::fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How sessions are authenticated in a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthStrategy {
    /// Every session is treated as already authenticated
    Bypass,
    /// Sessions go through a real identity provider
    IdentityProvider,
}

impl AuthStrategy {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bypass => "bypass",
            Self::IdentityProvider => "identity-provider",
        }
    }
}

impl std::fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability surface the UI consumes for authentication.
pub trait AuthProvider {
    /// Whether the current session is authenticated.
    fn is_authenticated(&self) -> bool;

    /// Establish a session.
    fn login(&mut self) -> Result<()>;

    /// Terminate the session, if any.
    fn logout(&mut self);
}

/// Seam to the real identity provider.
///
/// Transport, token handling, and refresh live behind this trait; the
/// core only selects and drives it.
pub trait IdentityGateway {
    /// Establish a session with the identity provider.
    fn establish_session(&mut self) -> Result<()>;

    /// Terminate the current session.
    fn end_session(&mut self);

    /// Whether a session is currently active.
    fn has_session(&self) -> bool;
}

/// Bypass provider: always authenticated, login/logout are no-ops.
#[derive(Debug, Default)]
pub struct BypassProvider;

impl AuthProvider for BypassProvider {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn login(&mut self) -> Result<()> {
        Ok(())
    }

    fn logout(&mut self) {}
}

/// Provider delegating to an injected [`IdentityGateway`].
pub struct IdentityProviderAuth {
    gateway: Box<dyn IdentityGateway>,
}

impl IdentityProviderAuth {
    /// Wrap a gateway into the provider surface.
    pub fn new(gateway: Box<dyn IdentityGateway>) -> Self {
        Self { gateway }
    }
}

impl AuthProvider for IdentityProviderAuth {
    fn is_authenticated(&self) -> bool {
        self.gateway.has_session()
    }

    fn login(&mut self) -> Result<()> {
        self.gateway.establish_session()
    }

    fn logout(&mut self) {
        self.gateway.end_session();
    }
}

/// The adapter pair bound to one environment mode. Selected once at
/// startup and never swapped for the session's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct AuthAdapter {
    mode: EnvironmentMode,
    strategy: AuthStrategy,
}

impl AuthAdapter {
    /// Resolve the adapter for a mode. Pure table lookup, total over
    /// the enum.
    pub fn for_mode(mode: EnvironmentMode) -> Self {
        Self {
            mode,
            strategy: mode.auth_strategy(),
        }
    }

    /// The mode this adapter was resolved for.
    pub fn mode(&self) -> EnvironmentMode {
        self.mode
    }

    /// The strategy this adapter binds.
    pub fn strategy(&self) -> AuthStrategy {
        self.strategy
    }

    /// Instantiate the provider. The gateway factory is only invoked
    /// for the identity-provider strategy; bypass modes never touch it.
    pub fn provider_with<F>(&self, gateway: F) -> Box<dyn AuthProvider>
    where
        F: FnOnce() -> Box<dyn IdentityGateway>,
    {
        match self.strategy {
            AuthStrategy::Bypass => Box::new(BypassProvider),
            AuthStrategy::IdentityProvider => Box::new(IdentityProviderAuth::new(gateway())),
        }
    }
}
