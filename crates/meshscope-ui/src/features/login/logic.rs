//! Login message composition and submit-control helpers.
//!
//! # Design
//! - Pure functions of form state, session snapshot and configuration.
//! - Messages are emitted in a fixed order; callers render them as one block.

use crate::core::auth::{AuthenticationConfig, LoginStatus, SessionSnapshot};
use crate::features::login::state::FormState;
use crate::i18n::TranslationBundle;

/// Which required inputs were empty on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Neither username nor password was entered.
    BothMissing,
    /// Only the username was missing.
    UsernameMissing,
    /// Only the password was missing.
    PasswordMissing,
}

impl ValidationFailure {
    const fn key(self) -> &'static str {
        match self {
            Self::BothMissing => "login.required_both",
            Self::UsernameMissing => "login.required_username",
            Self::PasswordMissing => "login.required_password",
        }
    }
}

/// Severity of a rendered login message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Blocking failure.
    Danger,
    /// Informational warning.
    Warning,
}

impl MessageKind {
    /// CSS modifier class for the alert.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Danger => "alert-error",
            Self::Warning => "alert-warning",
        }
    }
}

/// One entry of the composed message block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginMessage {
    /// Severity.
    pub kind: MessageKind,
    /// Localized text.
    pub text: String,
}

impl LoginMessage {
    fn danger(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Danger,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warning,
            text: text.into(),
        }
    }
}

/// Classify empty inputs; `None` means both were provided.
#[must_use]
pub const fn validation_failure(username: &str, password: &str) -> Option<ValidationFailure> {
    match (username.is_empty(), password.is_empty()) {
        (true, true) => Some(ValidationFailure::BothMissing),
        (true, false) => Some(ValidationFailure::UsernameMissing),
        (false, true) => Some(ValidationFailure::PasswordMissing),
        (false, false) => None,
    }
}

/// Localized validation message: fixed prefix followed by the variant text.
#[must_use]
pub fn validation_message(failure: ValidationFailure, bundle: &TranslationBundle) -> String {
    format!(
        "{}{}",
        bundle.text("login.validation_prefix", "Unable to log in: "),
        bundle.text(failure.key(), "")
    )
}

/// Assemble every message to show, in display order.
///
/// Order: validation error, missing secret, expired session, status error
/// (suppressed when the secret is missing), post-login error.
#[must_use]
pub fn compose_messages(
    form: &FormState,
    snapshot: &SessionSnapshot,
    config: &AuthenticationConfig,
    bundle: &TranslationBundle,
) -> Vec<LoginMessage> {
    let mut messages = Vec::new();
    if form.show_helper_text
        && let Some(error) = form.error_input.as_deref().filter(|text| !text.is_empty())
    {
        messages.push(LoginMessage::danger(error));
    }
    if config.secret_missing {
        messages.push(LoginMessage::danger(bundle.text("login.secret_missing", "")));
    }
    if snapshot.status == LoginStatus::Expired {
        messages.push(LoginMessage::warning(bundle.text("login.session_expired", "")));
    }
    if snapshot.status == LoginStatus::Error
        && !config.secret_missing
        && let Some(message) = snapshot.message.as_deref().filter(|text| !text.is_empty())
    {
        messages.push(LoginMessage::danger(message));
    }
    if let Some(error) = post_login_failure(snapshot) {
        messages.push(LoginMessage::danger(error));
    }
    messages
}

fn post_login_failure(snapshot: &SessionSnapshot) -> Option<&str> {
    snapshot
        .post_login_error
        .as_deref()
        .filter(|text| !text.is_empty())
}

/// Whether the submit control must be disabled.
#[must_use]
pub fn submit_disabled(snapshot: &SessionSnapshot) -> bool {
    snapshot.is_busy() || post_login_failure(snapshot).is_some()
}

/// Submit button label for the current session state.
#[must_use]
pub fn submit_label(snapshot: &SessionSnapshot, bundle: &TranslationBundle) -> String {
    if snapshot.is_busy() {
        bundle.text("login.submitting", "Logging in…")
    } else {
        bundle.text("login.submit", "Log In")
    }
}
