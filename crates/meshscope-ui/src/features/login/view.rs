//! Login page view.
//!
//! # Design
//! - Local form state lives in a shared cell that handlers read and update; a
//!   `use_state` mirror only schedules the re-render.
//! - Session state is read from the store as a snapshot; the view never mutates it.
//! - Configuration problems are logged, never thrown.

use crate::app::api::ApiCtx;
use crate::app::session::StoreSession;
use crate::core::auth::AuthenticationConfig;
use crate::core::store::{AppStore, select_snapshot};
use crate::features::login::actions::LoginEvent;
use crate::features::login::controller::{LatestForm, Navigator, mount};
use crate::features::login::logic::{compose_messages, submit_disabled, submit_label};
use crate::features::login::state::FormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use gloo::utils::window;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPageProps {
    pub config: AuthenticationConfig,
    pub api: ApiCtx,
}

#[derive(Clone)]
struct BrowserNavigator {
    username: NodeRef,
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        if let Err(err) = window().location().set_href(url) {
            console::error!("identity provider redirect failed", url, err);
        }
    }

    fn focus_username(&self) {
        if let Some(input) = self.username.cast::<HtmlInputElement>()
            && let Err(err) = input.focus()
        {
            console::error!("username focus failed", err);
        }
    }
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &LoginPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let form = use_state(FormState::default);
    let latest = LatestForm::from(use_mut_ref(FormState::default));
    let snapshot = use_selector(|store: &AppStore| select_snapshot(&store.session));
    let username_ref = use_node_ref();

    let session = StoreSession {
        dispatch: Dispatch::<AppStore>::new(),
        client: Rc::clone(&props.api.client),
    };
    let navigator = BrowserNavigator {
        username: username_ref.clone(),
    };

    {
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                mount(&session, &navigator);
                || ()
            },
            (),
        );
    }

    let apply = {
        let form = form.clone();
        let config = props.config.clone();
        let bundle = bundle.clone();
        Rc::new(move |event: LoginEvent| {
            match latest.apply(event, &config, &bundle, &session, &navigator) {
                Ok(Some(next)) => form.set(next),
                Ok(None) => {}
                Err(err) => console::error!("login configuration error", err.to_string()),
            }
        })
    };

    let on_username = {
        let apply = Rc::clone(&apply);
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                apply(LoginEvent::UsernameChanged(input.value()));
            }
        })
    };
    let on_password = {
        let apply = Rc::clone(&apply);
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                apply(LoginEvent::PasswordChanged(input.value()));
            }
        })
    };
    let on_submit = {
        let apply = Rc::clone(&apply);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            apply(LoginEvent::Submit);
        })
    };

    let messages = compose_messages(&form, &snapshot, &props.config, &bundle);
    let disabled = submit_disabled(&snapshot);
    let label = submit_label(&snapshot, &bundle);
    let external = props.config.strategy.is_external_idp();

    html! {
        <div class="login-page">
            <div class="card bg-base-100 shadow border border-base-200">
                <form class="card-body gap-4" onsubmit={on_submit}>
                    <header>
                        <h2 class="text-xl font-semibold">{t("login.title")}</h2>
                        <p class="text-sm text-base-content/60">{t("login.subtitle")}</p>
                    </header>
                    {if messages.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="login-messages grid gap-2" role="alert">
                                {for messages.iter().map(|message| html! {
                                    <div class={classes!("alert", message.kind.class())}>
                                        <span>{message.text.clone()}</span>
                                    </div>
                                })}
                            </div>
                        }
                    }}
                    {if external {
                        html! {
                            <button class="btn btn-primary w-full" type="submit" disabled={disabled}>
                                {t("login.external_submit")}
                            </button>
                        }
                    } else {
                        html! {
                            <>
                                <label class="form-control gap-1">
                                    <span class="label-text text-xs">{t("login.username")}</span>
                                    <input
                                        ref={username_ref.clone()}
                                        class={classes!("input", "input-bordered", "w-full", (!form.is_valid_username).then_some("input-error"))}
                                        type="text"
                                        name="username"
                                        autocomplete="username"
                                        aria-invalid={(!form.is_valid_username).to_string()}
                                        value={form.username.clone()}
                                        oninput={on_username} />
                                </label>
                                <label class="form-control gap-1">
                                    <span class="label-text text-xs">{t("login.password")}</span>
                                    <input
                                        class={classes!("input", "input-bordered", "w-full", (!form.is_valid_password).then_some("input-error"))}
                                        type="password"
                                        name="password"
                                        autocomplete="current-password"
                                        aria-invalid={(!form.is_valid_password).to_string()}
                                        value={form.password.clone()}
                                        oninput={on_password} />
                                </label>
                                <button class="btn btn-primary w-full" type="submit" disabled={disabled}>
                                    {label}
                                </button>
                            </>
                        }
                    }}
                </form>
            </div>
        </div>
    }
}
