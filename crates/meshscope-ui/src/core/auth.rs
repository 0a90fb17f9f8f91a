//! Authentication primitives shared across the UI.
//!
//! # Design
//! - Keep session state as simple data so reducers can update it without side effects.
//! - The login view only ever sees a [`SessionSnapshot`]; it never owns session state.
//! - Wire types come from `meshscope-api-models` so the UI and server agree on shape.

pub use meshscope_api_models::{
    AuthInfo as AuthenticationConfig, AuthStrategy, LoginSession, basic_auth_header,
};

/// Session lifecycle as observed by the console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    /// No session and no attempt in progress.
    #[default]
    LoggedOut,
    /// Credentials were submitted and the server has not answered yet.
    Logging,
    /// A live session exists.
    LoggedIn,
    /// The previous session expired or was revoked elsewhere.
    Expired,
    /// The last attempt failed; a message explains why.
    Error,
}

/// Read-only view of session state handed to the login controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current lifecycle status.
    pub status: LoginStatus,
    /// Status message supplied by the session layer (set on [`LoginStatus::Error`]).
    pub message: Option<String>,
    /// Whether the post-login bootstrap is still running.
    pub post_login_performing: bool,
    /// Failure raised while bootstrapping after a successful login.
    pub post_login_error: Option<String>,
}

impl SessionSnapshot {
    /// Whether a login attempt or its bootstrap is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.post_login_performing || self.status == LoginStatus::Logging
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginStatus, SessionSnapshot};

    #[test]
    fn snapshot_defaults_to_idle() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.status, LoginStatus::LoggedOut);
        assert!(!snapshot.is_busy());
    }

    #[test]
    fn busy_covers_logging_and_bootstrap() {
        let logging = SessionSnapshot {
            status: LoginStatus::Logging,
            ..SessionSnapshot::default()
        };
        assert!(logging.is_busy());
        let bootstrapping = SessionSnapshot {
            status: LoginStatus::LoggedIn,
            post_login_performing: true,
            ..SessionSnapshot::default()
        };
        assert!(bootstrapping.is_busy());
        let failed = SessionSnapshot {
            status: LoginStatus::Error,
            message: Some("denied".to_string()),
            ..SessionSnapshot::default()
        };
        assert!(!failed.is_busy());
    }
}
