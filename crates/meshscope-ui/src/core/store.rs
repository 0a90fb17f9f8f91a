//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Reducers are free functions over a slice so they run natively in tests.

use crate::core::auth::{AuthenticationConfig, LoginSession, LoginStatus, SessionSnapshot};
use chrono::{DateTime, Utc};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authentication configuration served by the backend.
    pub auth_config: AuthConfigState,
    /// Session lifecycle state.
    pub session: SessionSlice,
}

/// Loading state of the authentication configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthConfigState {
    /// Not fetched yet.
    #[default]
    Loading,
    /// Configuration is available.
    Ready(AuthenticationConfig),
    /// Fetch failed with the given message.
    Failed(String),
}

/// Identifier of one authenticate attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Shared session state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Lifecycle status.
    pub status: LoginStatus,
    /// Live session, when the server issued one.
    pub session: Option<LoginSession>,
    /// Message describing the last failure.
    pub message: Option<String>,
    /// Post-login bootstrap busy flag.
    pub post_login_performing: bool,
    /// Post-login bootstrap failure.
    pub post_login_error: Option<String>,
    in_flight: Option<RequestId>,
    last_request: u64,
}

/// Result of asking the server whether a session already exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialsCheck {
    /// The server returned a session.
    Session(LoginSession),
    /// The server has no session for this browser.
    NoSession,
    /// The check itself failed.
    Failed(String),
}

/// Build the read-only snapshot the login controller renders from.
#[must_use]
pub fn select_snapshot(slice: &SessionSlice) -> SessionSnapshot {
    SessionSnapshot {
        status: slice.status,
        message: slice.message.clone(),
        post_login_performing: slice.post_login_performing,
        post_login_error: slice.post_login_error.clone(),
    }
}

/// Whether the console should leave the login page.
#[must_use]
pub fn select_authenticated(slice: &SessionSlice) -> bool {
    slice.status == LoginStatus::LoggedIn
        && slice.session.is_some()
        && !slice.post_login_performing
        && slice.post_login_error.is_none()
}

/// Record a new authenticate attempt and return its id.
///
/// A newer attempt supersedes any attempt still in flight.
pub fn begin_authenticate(slice: &mut SessionSlice) -> RequestId {
    slice.last_request = slice.last_request.wrapping_add(1);
    let id = RequestId(slice.last_request);
    slice.in_flight = Some(id);
    slice.status = LoginStatus::Logging;
    slice.message = None;
    slice.post_login_error = None;
    id
}

/// Apply an authenticate response. Returns false when the response was stale.
pub fn finish_authenticate(
    slice: &mut SessionSlice,
    id: RequestId,
    result: Result<LoginSession, String>,
) -> bool {
    if slice.in_flight != Some(id) {
        return false;
    }
    slice.in_flight = None;
    match result {
        Ok(session) => {
            slice.status = LoginStatus::LoggedIn;
            slice.session = Some(session);
            slice.message = None;
        }
        Err(message) => {
            slice.status = LoginStatus::Error;
            slice.session = None;
            slice.message = Some(message);
        }
    }
    true
}

/// Mark a credentials check as dispatched.
///
/// The returned id names the latest authenticate attempt at dispatch time.
#[must_use]
pub const fn begin_credentials_check(slice: &SessionSlice) -> RequestId {
    RequestId(slice.last_request)
}

/// Apply the outcome of a credentials check at `now`.
///
/// Returns false when the check was superseded by a login attempt that began
/// after it was dispatched, or by one still in flight.
pub fn apply_credentials_check(
    slice: &mut SessionSlice,
    since: RequestId,
    check: CredentialsCheck,
    now: DateTime<Utc>,
) -> bool {
    if slice.in_flight.is_some() || slice.last_request != since.0 {
        return false;
    }
    match check {
        CredentialsCheck::Session(session) if session.is_expired_at(now) => {
            slice.status = LoginStatus::Expired;
            slice.session = None;
            slice.message = None;
        }
        CredentialsCheck::Session(session) => {
            slice.status = LoginStatus::LoggedIn;
            slice.session = Some(session);
            slice.message = None;
        }
        CredentialsCheck::NoSession => {
            if slice.status != LoginStatus::Expired {
                slice.status = LoginStatus::LoggedOut;
            }
            slice.session = None;
            slice.message = None;
        }
        CredentialsCheck::Failed(message) => {
            slice.status = LoginStatus::Error;
            slice.session = None;
            slice.message = Some(message);
        }
    }
    true
}

/// Move a live session to [`LoginStatus::Expired`] once it runs out.
///
/// Returns true when the status changed.
pub fn expire_if_due(slice: &mut SessionSlice, now: DateTime<Utc>) -> bool {
    let due = slice.status == LoginStatus::LoggedIn
        && slice
            .session
            .as_ref()
            .is_some_and(|session| session.is_expired_at(now));
    if due {
        slice.status = LoginStatus::Expired;
        slice.session = None;
        slice.post_login_error = None;
    }
    due
}

/// Drop the session after an explicit logout.
pub fn logout(slice: &mut SessionSlice) {
    slice.status = LoginStatus::LoggedOut;
    slice.session = None;
    slice.message = None;
    slice.post_login_performing = false;
    slice.post_login_error = None;
    slice.in_flight = None;
}

/// Mark the post-login bootstrap as running.
pub fn begin_post_login(slice: &mut SessionSlice) {
    slice.post_login_performing = true;
    slice.post_login_error = None;
}

/// Finish the post-login bootstrap, recording a failure if one occurred.
pub fn finish_post_login(slice: &mut SessionSlice, error: Option<String>) {
    slice.post_login_performing = false;
    slice.post_login_error = error;
}
