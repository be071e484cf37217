//! # Identity Provider Configuration
//!
//! Configuration for the external Keycloak identity provider: server
//! location, realm, the confidential client used for token introspection,
//! and the per-call timeout.
//!
//! Reads from environment variables:
//! - `KEYCLOAK_AUTH_SERVER_URL`: base URL of the Keycloak server
//! - `KEYCLOAK_REALM`: realm the API authenticates against
//! - `KEYCLOAK_CLIENT_ID` / `KEYCLOAK_CLIENT_SECRET`: confidential client
//!   credentials for the introspection endpoint
//! - `KEYCLOAK_TIMEOUT_SECS`: optional per-call timeout (default: `5`)
//!
//! # Examples
//! ```rust,no_run
//! use keyway_user_api::config::keycloak::KeycloakConfig;
//!
//! let cfg = KeycloakConfig::from_env();
//! if cfg.is_valid() {
//!     println!("introspecting at {}", cfg.introspect_url().unwrap());
//! }
//! ```

use std::{env as std_env, time::Duration};

/// Default per-call timeout for provider requests, in seconds.
///
/// The guard pipeline blocks request execution on provider answers, so the
/// timeout doubles as the worst-case latency a broken provider can add.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Identity provider connection configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeycloakConfig {
    pub url: Option<String>,
    pub realm: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub timeout_secs: u64,
}

impl KeycloakConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std_env::var(k).ok())
    }

    /// Loads configuration using a custom key provider (for testing/mocking).
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = get("KEYCLOAK_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            url: get("KEYCLOAK_AUTH_SERVER_URL"),
            realm: get("KEYCLOAK_REALM"),
            client_id: get("KEYCLOAK_CLIENT_ID"),
            client_secret: get("KEYCLOAK_CLIENT_SECRET"),
            timeout_secs,
        }
    }

    /// Returns `true` if every required variable is present.
    pub fn is_valid(&self) -> bool {
        self.url.is_some()
            && self.realm.is_some()
            && self.client_id.is_some()
            && self.client_secret.is_some()
    }

    /// The per-call timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token introspection endpoint for the configured realm, or `None`
    /// when the URL or realm is missing.
    pub fn introspect_url(&self) -> Option<String> {
        let base = self.realm_base()?;
        Some(format!("{base}/protocol/openid-connect/token/introspect"))
    }

    /// Userinfo endpoint for the configured realm, or `None` when the URL
    /// or realm is missing.
    pub fn userinfo_url(&self) -> Option<String> {
        let base = self.realm_base()?;
        Some(format!("{base}/protocol/openid-connect/userinfo"))
    }

    fn realm_base(&self) -> Option<String> {
        let url = self.url.as_deref()?.trim_end_matches('/');
        let realm = self.realm.as_deref()?;
        Some(format!("{url}/realms/{realm}"))
    }
}
