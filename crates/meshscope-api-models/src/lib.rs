#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Meshscope authentication API.
//!
//! The server speaks camelCase JSON; these types mirror that contract so the
//! UI never hand-parses payloads. Credential encoding for the `Authorization`
//! header also lives here because it is part of the wire contract.
use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authentication strategy configured on the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    /// Username/password form validated by the server.
    Login,
    /// Delegated login through the `OpenShift` OAuth server.
    Openshift,
    /// Delegated login through an `OpenID` Connect provider.
    Openid,
}

impl AuthStrategy {
    /// Whether login is delegated to an external identity provider.
    #[must_use]
    pub const fn is_external_idp(self) -> bool {
        matches!(self, Self::Openshift | Self::Openid)
    }

    /// Wire value for the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Openshift => "openshift",
            Self::Openid => "openid",
        }
    }
}

/// Authentication configuration served by `GET /api/auth/info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    /// Active strategy.
    pub strategy: AuthStrategy,
    /// Authorization URL for external identity providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    /// Set when the server has no signing secret and will refuse all logins.
    #[serde(default)]
    pub secret_missing: bool,
}

impl Default for AuthInfo {
    fn default() -> Self {
        Self {
            strategy: AuthStrategy::Login,
            authorization_endpoint: None,
            secret_missing: false,
        }
    }
}

/// Authenticated session returned by `/api/authenticate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    /// Name the session belongs to.
    pub username: String,
    /// Instant after which the server rejects the session.
    pub expires_on: DateTime<Utc>,
}

impl LoginSession {
    /// Whether the session is no longer valid at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_on <= now
    }
}

/// Error document returned on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Human-readable description supplied by the server.
    pub error: String,
}

/// Server status loaded after a successful login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    /// Component name to version/state pairs.
    #[serde(default)]
    pub status: BTreeMap<String, String>,
    /// Operator-facing warnings to surface after login.
    #[serde(default)]
    pub warning_messages: Vec<String>,
}

/// Build the `Authorization` header value for username/password login.
///
/// Credentials are encoded as UTF-8 before base64 so non-Latin names survive.
#[must_use]
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let raw = format!("{username}:{password}");
    format!("Basic {}", general_purpose::STANDARD.encode(raw.as_bytes()))
}
