//! Login feature actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects; effects describe work for the host.

/// User interactions the login form reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    /// The username input changed.
    UsernameChanged(String),
    /// The password input changed.
    PasswordChanged(String),
    /// The form was submitted.
    Submit,
}

/// Work requested by a transition, performed by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEffect {
    /// Ask the session layer whether a session already exists.
    CheckCredentials,
    /// Move keyboard focus to the username input.
    FocusUsername,
    /// Exchange credentials for a session.
    Authenticate {
        /// Submitted username.
        username: String,
        /// Submitted password.
        password: String,
    },
    /// Leave the console for the identity provider.
    Redirect(String),
}

/// Effects requested when the login view mounts.
#[must_use]
pub const fn mount_effects() -> [LoginEffect; 2] {
    [LoginEffect::CheckCredentials, LoginEffect::FocusUsername]
}
