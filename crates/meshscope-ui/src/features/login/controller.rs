//! Login flow controller: runs transitions and hands effects to injected collaborators.
//!
//! # Design
//! - The session layer and the browser are reached only through the traits below.
//! - Dispatch is fire-and-forget; results come back through the session snapshot.

use crate::core::auth::AuthenticationConfig;
use crate::features::login::actions::{LoginEffect, LoginEvent, mount_effects};
use crate::features::login::state::{FormState, LoginConfigError, transition};
use crate::i18n::TranslationBundle;
use std::cell::RefCell;
use std::rc::Rc;

/// Session operations the login flow may request.
pub trait SessionDispatch {
    /// Ask whether a session already exists.
    fn check_credentials(&self);
    /// Exchange credentials for a session.
    fn authenticate(&self, username: &str, password: &str);
}

/// Browser capabilities the login flow may request.
pub trait Navigator {
    /// Perform a full navigation to `url`.
    fn redirect(&self, url: &str);
    /// Focus the username input; a no-op when it is not rendered.
    fn focus_username(&self);
}

/// Run the mount effects: one credentials check and a focus request.
pub fn mount<D, N>(dispatch: &D, navigator: &N)
where
    D: SessionDispatch + ?Sized,
    N: Navigator + ?Sized,
{
    for effect in mount_effects() {
        perform(effect, dispatch, navigator);
    }
}

/// Apply `event` to `form`, perform the resulting effect and return the next form.
///
/// # Errors
/// Propagates [`LoginConfigError`] from [`transition`]; nothing is dispatched then.
pub fn handle_event<D, N>(
    form: &FormState,
    event: LoginEvent,
    config: &AuthenticationConfig,
    bundle: &TranslationBundle,
    dispatch: &D,
    navigator: &N,
) -> Result<FormState, LoginConfigError>
where
    D: SessionDispatch + ?Sized,
    N: Navigator + ?Sized,
{
    let next = transition(form, event, config, bundle)?;
    if let Some(effect) = next.effect {
        perform(effect, dispatch, navigator);
    }
    Ok(next.form)
}

/// Latest form state shared by every event handler of one login page.
///
/// Handlers fired before the next render still start from the newest form.
#[derive(Clone, Debug, Default)]
pub struct LatestForm(Rc<RefCell<FormState>>);

impl From<Rc<RefCell<FormState>>> for LatestForm {
    fn from(cell: Rc<RefCell<FormState>>) -> Self {
        Self(cell)
    }
}

impl LatestForm {
    /// Copy of the most recent form.
    #[must_use]
    pub fn current(&self) -> FormState {
        self.0.borrow().clone()
    }

    /// Run [`handle_event`] against the most recent form and store the result.
    ///
    /// Returns the next form when it differs from the previous one.
    ///
    /// # Errors
    /// Propagates [`LoginConfigError`]; the stored form is left untouched.
    pub fn apply<D, N>(
        &self,
        event: LoginEvent,
        config: &AuthenticationConfig,
        bundle: &TranslationBundle,
        dispatch: &D,
        navigator: &N,
    ) -> Result<Option<FormState>, LoginConfigError>
    where
        D: SessionDispatch + ?Sized,
        N: Navigator + ?Sized,
    {
        let current = self.current();
        let next = handle_event(&current, event, config, bundle, dispatch, navigator)?;
        if next == current {
            return Ok(None);
        }
        self.0.replace(next.clone());
        Ok(Some(next))
    }
}

fn perform<D, N>(effect: LoginEffect, dispatch: &D, navigator: &N)
where
    D: SessionDispatch + ?Sized,
    N: Navigator + ?Sized,
{
    match effect {
        LoginEffect::CheckCredentials => dispatch.check_credentials(),
        LoginEffect::FocusUsername => navigator.focus_username(),
        LoginEffect::Authenticate { username, password } => {
            dispatch.authenticate(&username, &password);
        }
        LoginEffect::Redirect(url) => navigator.redirect(&url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthStrategy;
    use crate::i18n::LocaleCode;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Check,
        Authenticate(String, String),
        Redirect(String),
        Focus,
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Call>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<Call> {
            self.calls.take()
        }
    }

    impl SessionDispatch for Recorder {
        fn check_credentials(&self) {
            self.calls.borrow_mut().push(Call::Check);
        }

        fn authenticate(&self, username: &str, password: &str) {
            self.calls
                .borrow_mut()
                .push(Call::Authenticate(username.to_string(), password.to_string()));
        }
    }

    impl Navigator for Recorder {
        fn redirect(&self, url: &str) {
            self.calls.borrow_mut().push(Call::Redirect(url.to_string()));
        }

        fn focus_username(&self) {
            self.calls.borrow_mut().push(Call::Focus);
        }
    }

    fn fill(
        recorder: &Recorder,
        config: &AuthenticationConfig,
        username: &str,
        password: &str,
    ) -> FormState {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let form = handle_event(
            &FormState::default(),
            LoginEvent::UsernameChanged(username.to_string()),
            config,
            &bundle,
            recorder,
            recorder,
        )
        .expect("username");
        handle_event(
            &form,
            LoginEvent::PasswordChanged(password.to_string()),
            config,
            &bundle,
            recorder,
            recorder,
        )
        .expect("password")
    }

    fn submit(
        recorder: &Recorder,
        config: &AuthenticationConfig,
        form: &FormState,
    ) -> Result<FormState, LoginConfigError> {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        handle_event(form, LoginEvent::Submit, config, &bundle, recorder, recorder)
    }

    #[test]
    fn mount_checks_credentials_once() {
        let recorder = Recorder::default();
        mount(&recorder, &recorder);
        assert_eq!(recorder.take(), vec![Call::Check, Call::Focus]);
        mount(&recorder, &recorder);
        let calls = recorder.take();
        assert_eq!(calls.iter().filter(|call| **call == Call::Check).count(), 1);
    }

    #[test]
    fn typing_dispatches_nothing() {
        let recorder = Recorder::default();
        fill(&recorder, &AuthenticationConfig::default(), "alice", "pw");
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn valid_submit_authenticates_exactly_once() {
        let recorder = Recorder::default();
        let config = AuthenticationConfig::default();
        let form = fill(&recorder, &config, "alice", "s3cret");
        let next = submit(&recorder, &config, &form).expect("submit");
        assert_eq!(
            recorder.take(),
            vec![Call::Authenticate("alice".to_string(), "s3cret".to_string())]
        );
        assert!(!next.show_helper_text);
    }

    #[test]
    fn invalid_submit_never_authenticates() {
        let recorder = Recorder::default();
        let config = AuthenticationConfig::default();
        for (username, password) in [("", ""), ("", "pw"), ("alice", "")] {
            let form = fill(&recorder, &config, username, password);
            let next = submit(&recorder, &config, &form).expect("submit");
            assert!(next.show_helper_text);
            assert!(recorder.take().is_empty());
        }
    }

    #[test]
    fn external_idp_only_navigates() {
        let recorder = Recorder::default();
        let config = AuthenticationConfig {
            strategy: AuthStrategy::Openshift,
            authorization_endpoint: Some("https://oauth.example/authorize".to_string()),
            secret_missing: false,
        };
        let form = fill(&recorder, &config, "alice", "pw");
        let next = submit(&recorder, &config, &form).expect("submit");
        assert_eq!(next, form);
        assert_eq!(
            recorder.take(),
            vec![Call::Redirect("https://oauth.example/authorize".to_string())]
        );
    }

    #[test]
    fn back_to_back_events_build_on_each_other() {
        let recorder = Recorder::default();
        let config = AuthenticationConfig::default();
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let latest = LatestForm::default();
        let apply = |event| {
            latest
                .apply(event, &config, &bundle, &recorder, &recorder)
                .expect("local strategy")
        };

        let filled = apply(LoginEvent::UsernameChanged("alice".to_string()));
        assert_eq!(filled.map(|form| form.username), Some("alice".to_string()));
        apply(LoginEvent::PasswordChanged("pw".to_string()));
        apply(LoginEvent::Submit);

        assert_eq!(latest.current().username, "alice");
        assert!(!latest.current().show_helper_text);
        assert_eq!(
            recorder.take(),
            vec![Call::Authenticate("alice".to_string(), "pw".to_string())]
        );
    }

    #[test]
    fn unchanged_form_reports_no_update() {
        let recorder = Recorder::default();
        let config = AuthenticationConfig::default();
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let latest = LatestForm::default();
        let next = latest
            .apply(
                LoginEvent::UsernameChanged(String::new()),
                &config,
                &bundle,
                &recorder,
                &recorder,
            )
            .expect("local strategy");
        assert!(next.is_none());
    }

    #[test]
    fn missing_endpoint_dispatches_nothing() {
        let recorder = Recorder::default();
        let config = AuthenticationConfig {
            strategy: AuthStrategy::Openid,
            authorization_endpoint: None,
            secret_missing: false,
        };
        let err = submit(&recorder, &config, &FormState::default()).expect_err("config error");
        assert!(matches!(
            err,
            LoginConfigError::MissingAuthorizationEndpoint { strategy: "openid" }
        ));
        assert!(recorder.take().is_empty());
    }
}
