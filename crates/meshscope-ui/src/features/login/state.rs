//! Login form state and its transition function.
//!
//! # Design
//! - Keep inputs as raw strings; validation happens on submit only.
//! - Every change goes through [`transition`], which returns the next state plus
//!   at most one effect, so the whole flow is testable without a renderer.
//! - The strategy alone picks the submit branch.

use crate::core::auth::AuthenticationConfig;
use crate::features::login::actions::{LoginEffect, LoginEvent};
use crate::features::login::logic::{validation_failure, validation_message};
use crate::i18n::TranslationBundle;
use thiserror::Error;

/// Locally owned credential form state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    /// Username input value.
    pub username: String,
    /// Password input value.
    pub password: String,
    /// Username was non-empty at the last submit.
    pub is_valid_username: bool,
    /// Password was non-empty at the last submit.
    pub is_valid_password: bool,
    /// Both inputs were non-empty at the last submit.
    pub filled_inputs: bool,
    /// A validation message is showing.
    pub show_helper_text: bool,
    /// Localized validation message from the last submit.
    pub error_input: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            is_valid_username: true,
            is_valid_password: true,
            filled_inputs: true,
            show_helper_text: false,
            error_input: None,
        }
    }
}

/// Configuration problems detected while handling a login event.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoginConfigError {
    /// An external identity provider is configured without an authorization URL.
    #[error("strategy `{strategy}` has no authorization endpoint configured")]
    MissingAuthorizationEndpoint {
        /// Wire name of the configured strategy.
        strategy: &'static str,
    },
}

/// Outcome of applying one event to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Form state after the event.
    pub form: FormState,
    /// Work to perform, if any.
    pub effect: Option<LoginEffect>,
}

impl Transition {
    const fn pure(form: FormState) -> Self {
        Self { form, effect: None }
    }
}

/// Apply `event` to `form` under the given configuration.
///
/// # Errors
/// Returns [`LoginConfigError`] when an external identity provider is
/// configured without an authorization endpoint. The form is left untouched
/// and nothing is dispatched in that case.
pub fn transition(
    form: &FormState,
    event: LoginEvent,
    config: &AuthenticationConfig,
    bundle: &TranslationBundle,
) -> Result<Transition, LoginConfigError> {
    match event {
        LoginEvent::UsernameChanged(username) => Ok(Transition::pure(FormState {
            username,
            ..form.clone()
        })),
        LoginEvent::PasswordChanged(password) => Ok(Transition::pure(FormState {
            password,
            ..form.clone()
        })),
        LoginEvent::Submit if config.strategy.is_external_idp() => {
            let endpoint = config.authorization_endpoint.as_ref().ok_or(
                LoginConfigError::MissingAuthorizationEndpoint {
                    strategy: config.strategy.as_str(),
                },
            )?;
            Ok(Transition {
                form: form.clone(),
                effect: Some(LoginEffect::Redirect(endpoint.clone())),
            })
        }
        LoginEvent::Submit => Ok(submit_credentials(form, bundle)),
    }
}

fn submit_credentials(form: &FormState, bundle: &TranslationBundle) -> Transition {
    let is_valid_username = !form.username.is_empty();
    let is_valid_password = !form.password.is_empty();
    let filled_inputs = is_valid_username && is_valid_password;

    match validation_failure(&form.username, &form.password) {
        None => Transition {
            form: FormState {
                is_valid_username,
                is_valid_password,
                filled_inputs,
                show_helper_text: false,
                error_input: None,
                ..form.clone()
            },
            effect: Some(LoginEffect::Authenticate {
                username: form.username.clone(),
                password: form.password.clone(),
            }),
        },
        Some(failure) => Transition::pure(FormState {
            is_valid_username: false,
            is_valid_password: false,
            filled_inputs,
            show_helper_text: true,
            error_input: Some(validation_message(failure, bundle)),
            ..form.clone()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthStrategy;
    use crate::i18n::LocaleCode;

    fn local() -> AuthenticationConfig {
        AuthenticationConfig::default()
    }

    fn openshift(endpoint: Option<&str>) -> AuthenticationConfig {
        AuthenticationConfig {
            strategy: AuthStrategy::Openshift,
            authorization_endpoint: endpoint.map(ToString::to_string),
            secret_missing: false,
        }
    }

    fn zh() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::Zh)
    }

    fn filled(username: &str, password: &str) -> FormState {
        FormState {
            username: username.to_string(),
            password: password.to_string(),
            ..FormState::default()
        }
    }

    fn submit(form: &FormState, config: &AuthenticationConfig) -> Transition {
        transition(form, LoginEvent::Submit, config, &zh()).expect("submit succeeds")
    }

    #[test]
    fn defaults_start_valid_and_quiet() {
        let form = FormState::default();
        assert!(form.is_valid_username && form.is_valid_password && form.filled_inputs);
        assert!(!form.show_helper_text);
        assert!(form.error_input.is_none());
    }

    #[test]
    fn input_changes_overwrite_without_validating() {
        let start = FormState {
            show_helper_text: true,
            error_input: Some("stale".to_string()),
            is_valid_username: false,
            ..FormState::default()
        };
        let next = transition(
            &start,
            LoginEvent::UsernameChanged("alice".to_string()),
            &local(),
            &zh(),
        )
        .expect("change");
        assert_eq!(next.form.username, "alice");
        assert!(next.effect.is_none());
        assert!(next.form.show_helper_text);
        assert!(!next.form.is_valid_username);

        let next = transition(
            &next.form,
            LoginEvent::PasswordChanged("pw".to_string()),
            &local(),
            &zh(),
        )
        .expect("change");
        assert_eq!(next.form.password, "pw");
        assert_eq!(next.form.username, "alice");
    }

    #[test]
    fn complete_credentials_request_authentication() {
        let start = FormState {
            show_helper_text: true,
            error_input: Some("old".to_string()),
            ..filled("alice", "s3cret")
        };
        let next = submit(&start, &local());
        assert_eq!(
            next.effect,
            Some(LoginEffect::Authenticate {
                username: "alice".to_string(),
                password: "s3cret".to_string(),
            })
        );
        assert!(!next.form.show_helper_text);
        assert!(next.form.error_input.is_none());
        assert!(next.form.filled_inputs);
        assert!(next.form.is_valid_username && next.form.is_valid_password);
    }

    #[test]
    fn empty_credentials_report_both_required() {
        let next = submit(&FormState::default(), &local());
        assert!(next.effect.is_none());
        assert_eq!(
            next.form.error_input.as_deref(),
            Some("无法登录：用户名和密码为必填项。")
        );
        assert!(next.form.show_helper_text);
        assert!(!next.form.filled_inputs);
        assert!(!next.form.is_valid_username);
        assert!(!next.form.is_valid_password);
    }

    #[test]
    fn missing_username_reports_username_required() {
        let next = submit(&filled("", "pw"), &local());
        assert!(next.effect.is_none());
        assert_eq!(
            next.form.error_input.as_deref(),
            Some("无法登录：用户名是必填项。")
        );
        assert!(!next.form.filled_inputs);
        assert!(!next.form.is_valid_username && !next.form.is_valid_password);
    }

    #[test]
    fn missing_password_reports_password_required() {
        let next = submit(&filled("alice", ""), &local());
        assert!(next.effect.is_none());
        assert_eq!(
            next.form.error_input.as_deref(),
            Some("无法登录：密码是必填项。")
        );
        assert!(!next.form.filled_inputs);
    }

    #[test]
    fn repeated_invalid_submits_do_not_accumulate() {
        let first = submit(&filled("", "pw"), &local());
        let second = submit(&first.form, &local());
        assert_eq!(first, second);
    }

    #[test]
    fn whitespace_counts_as_input() {
        let next = submit(&filled(" ", " "), &local());
        assert!(matches!(
            next.effect,
            Some(LoginEffect::Authenticate { .. })
        ));
    }

    #[test]
    fn external_idp_redirects_without_touching_form() {
        let start = filled("", "");
        let next = submit(&start, &openshift(Some("https://oauth.example/authorize")));
        assert_eq!(next.form, start);
        assert_eq!(
            next.effect,
            Some(LoginEffect::Redirect(
                "https://oauth.example/authorize".to_string()
            ))
        );
    }

    #[test]
    fn openid_also_redirects() {
        let config = AuthenticationConfig {
            strategy: AuthStrategy::Openid,
            authorization_endpoint: Some("https://idp.example/auth".to_string()),
            secret_missing: false,
        };
        let next = submit(&filled("alice", "pw"), &config);
        assert_eq!(
            next.effect,
            Some(LoginEffect::Redirect("https://idp.example/auth".to_string()))
        );
    }

    #[test]
    fn external_idp_without_endpoint_is_a_config_error() {
        let err = transition(
            &FormState::default(),
            LoginEvent::Submit,
            &openshift(None),
            &zh(),
        )
        .expect_err("missing endpoint");
        assert_eq!(
            err,
            LoginConfigError::MissingAuthorizationEndpoint {
                strategy: "openshift"
            }
        );
        assert!(err.to_string().contains("openshift"));
    }

    #[test]
    fn english_bundle_localizes_messages() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let next = transition(&FormState::default(), LoginEvent::Submit, &local(), &bundle)
            .expect("submit");
        assert_eq!(
            next.form.error_input.as_deref(),
            Some("Unable to log in: Username and password are required.")
        );
    }
}
