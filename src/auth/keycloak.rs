//! # Keycloak Adapter
//!
//! [`IdentityProvider`] implementation backed by a Keycloak server. The
//! validity check uses the OAuth 2.0 token introspection endpoint
//! (RFC 7662) and the claims fetch uses the OpenID Connect userinfo
//! endpoint.
//!
//! ## Wire contract
//!
//! - `POST {url}/realms/{realm}/protocol/openid-connect/token/introspect`
//!   with the confidential client's credentials as HTTP basic auth and the
//!   token in a form body; the answer carries `{"active": bool}`.
//! - `GET {url}/realms/{realm}/protocol/openid-connect/userinfo` with the
//!   token as bearer auth; the body deserializes into [`Claims`].
//!
//! Every call is bounded by the configured timeout, so a slow or broken
//! provider can only ever delay a denial, never grant access.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::provider::{Claims, IdentityProvider, ProviderError};
use crate::config::keycloak::KeycloakConfig;

/// Introspection response. Only `active` matters here; a response without
/// the field reads as inactive.
#[derive(Debug, Deserialize)]
struct Introspection {
    #[serde(default)]
    active: bool,
}

/// HTTP client for one Keycloak realm.
///
/// Shared via `Arc<dyn IdentityProvider>` across request executions; the
/// inner `reqwest::Client` pools connections internally.
#[derive(Debug)]
pub struct KeycloakProvider {
    client: reqwest::Client,
    introspect_url: String,
    userinfo_url: String,
    client_id: String,
    client_secret: String,
}

impl KeycloakProvider {
    /// Builds a provider from configuration.
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or the HTTP
    /// client cannot be constructed.
    pub fn new(cfg: &KeycloakConfig) -> anyhow::Result<Self> {
        let introspect_url = cfg.introspect_url().ok_or_else(|| {
            anyhow::anyhow!("KEYCLOAK_AUTH_SERVER_URL or KEYCLOAK_REALM is not set")
        })?;
        let userinfo_url = cfg.userinfo_url().ok_or_else(|| {
            anyhow::anyhow!("KEYCLOAK_AUTH_SERVER_URL or KEYCLOAK_REALM is not set")
        })?;
        let client_id = cfg
            .client_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("KEYCLOAK_CLIENT_ID is not set"))?;
        let client_secret = cfg
            .client_secret
            .clone()
            .ok_or_else(|| anyhow::anyhow!("KEYCLOAK_CLIENT_SECRET is not set"))?;

        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .context("failed to build the identity provider HTTP client")?;

        Ok(Self {
            client,
            introspect_url,
            userinfo_url,
            client_id,
            client_secret,
        })
    }
}

/// Maps a transport-level failure, distinguishing timeouts so the log can
/// tell a saturated provider from an unreachable one.
fn call_failed(operation: &str, err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(format!("{operation}: {err}"))
    }
}

#[async_trait]
impl IdentityProvider for KeycloakProvider {
    async fn validate_access_token(&self, token: &str) -> Result<bool, ProviderError> {
        let resp = self
            .client
            .post(&self.introspect_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("token", token)])
            .send()
            .await
            .map_err(|e| call_failed("introspect", e))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Malformed(format!(
                "introspect: HTTP {}",
                resp.status()
            )));
        }

        let introspection: Introspection = resp
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("introspect: {e}")))?;

        Ok(introspection.active)
    }

    async fn user_info(&self, token: &str) -> Result<Claims, ProviderError> {
        let resp = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| call_failed("userinfo", e))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Malformed(format!(
                "userinfo: HTTP {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("userinfo: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn complete_config() -> KeycloakConfig {
        KeycloakConfig {
            url: Some("https://sso.example.com".into()),
            realm: Some("demo".into()),
            client_id: Some("user-api".into()),
            client_secret: Some("s3cret".into()),
            timeout_secs: 5,
        }
    }

    #[test]
    fn builds_with_complete_config() {
        let provider = KeycloakProvider::new(&complete_config()).unwrap();

        assert_eq!(
            provider.introspect_url,
            "https://sso.example.com/realms/demo/protocol/openid-connect/token/introspect"
        );
        assert_eq!(
            provider.userinfo_url,
            "https://sso.example.com/realms/demo/protocol/openid-connect/userinfo"
        );
    }

    #[test]
    fn missing_client_secret_fails_construction() {
        let cfg = KeycloakConfig {
            client_secret: None,
            ..complete_config()
        };

        let err = KeycloakProvider::new(&cfg).unwrap_err();
        assert!(err.to_string().contains("KEYCLOAK_CLIENT_SECRET"));
    }

    #[test]
    fn missing_url_fails_construction() {
        let cfg = KeycloakConfig {
            url: None,
            ..complete_config()
        };

        assert!(KeycloakProvider::new(&cfg).is_err());
    }

    #[test]
    fn usable_as_shared_trait_object() {
        let provider = KeycloakProvider::new(&complete_config()).unwrap();
        let _shared: Arc<dyn IdentityProvider> = Arc::new(provider);
    }

    #[test]
    fn introspection_active_flag_defaults_to_inactive() {
        let on: Introspection = serde_json::from_str(r#"{"active": true}"#).unwrap();
        assert!(on.active);

        let off: Introspection = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert!(!off.active);

        // RFC 7662 requires the field, but an answer without it must not
        // read as valid.
        let silent: Introspection = serde_json::from_str(r#"{"exp": 0}"#).unwrap();
        assert!(!silent.active);
    }
}
