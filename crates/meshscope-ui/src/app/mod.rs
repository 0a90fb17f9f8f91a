use crate::app::api::ApiCtx;
use crate::app::session::logout_session;
use crate::components::locale_menu::LocaleMenu;
use crate::components::session_bar::SessionBar;
use crate::core::store::{AppStore, AuthConfigState, expire_if_due, select_authenticated};
use crate::features::login::view::LoginPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use anyhow::Context;
use chrono::Utc;
use gloo::console;
use gloo_timers::callback::Interval;
use preferences::{api_base_url, load_locale, persist_locale};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;
mod routes;
pub(crate) mod session;

const EXPIRY_TICK_MS: u32 = 5_000;

#[function_component(MeshscopeApp)]
pub(crate) fn meshscope_app() -> Html {
    let locale = use_state(load_locale);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let expiry_tick = use_mut_ref(|| None as Option<Interval>);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    let auth_config = use_selector(|store: &AppStore| store.auth_config.clone());
    let authenticated = use_selector(|store: &AppStore| select_authenticated(&store.session));
    let session = use_selector(|store: &AppStore| store.session.session.clone());

    {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    let next = match client
                        .fetch_auth_info()
                        .await
                        .context("fetching authentication config")
                    {
                        Ok(config) => AuthConfigState::Ready(config),
                        Err(err) => {
                            let detail = format!("{err:#}");
                            console::error!("auth info request failed", detail.as_str());
                            AuthConfigState::Failed(detail)
                        }
                    };
                    dispatch.reduce_mut(|store| store.auth_config = next);
                });
                || ()
            },
            (),
        );
    }
    {
        let dispatch = dispatch.clone();
        let expiry_tick = expiry_tick.clone();
        use_effect_with_deps(
            move |_| {
                let handle = Interval::new(EXPIRY_TICK_MS, move || {
                    dispatch.reduce_mut(|store| {
                        if expire_if_due(&mut store.session, Utc::now()) {
                            console::log!("session expired");
                        }
                    });
                });
                *expiry_tick.borrow_mut() = Some(handle);
                move || {
                    expiry_tick.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| {
            persist_locale(next);
            locale.set(next);
        })
    };
    let on_logout = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |()| logout_session(dispatch.clone(), api_ctx.client.clone()))
    };

    let t = |key: &str| bundle.text(key, "");
    let routes_bundle = bundle.clone();
    let routes_api = (*api_ctx).clone();
    let auth_config = (*auth_config).clone();
    let authenticated = *authenticated;
    let session = (*session).clone();

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter>
                <div class="app-shell min-h-screen flex flex-col">
                    <header class="navbar border-b border-base-200 px-4">
                        <span class="flex-1 text-lg font-semibold">{t("app.name")}</span>
                        <LocaleMenu
                            locale={*locale}
                            label={AttrValue::from(t("locale.label"))}
                            on_select={on_locale} />
                    </header>
                    <main class="flex-1 flex items-center justify-center p-4">
                        <Switch<Route> render={move |route| {
                            let t = |key: &str| routes_bundle.text(key, "");
                            match route {
                                Route::Login => match &auth_config {
                                    _ if authenticated => html! { <Redirect<Route> to={Route::Overview} /> },
                                    AuthConfigState::Loading => html! {
                                        <p class="text-base-content/60">{t("app.loading")}</p>
                                    },
                                    AuthConfigState::Failed(err) => html! {
                                        <p class="alert alert-error">{format!("{}{err}", t("app.config_error"))}</p>
                                    },
                                    AuthConfigState::Ready(config) => html! {
                                        <LoginPage config={config.clone()} api={routes_api.clone()} />
                                    },
                                },
                                Route::Overview => match &session {
                                    Some(session) if authenticated => html! {
                                        <section class="card bg-base-100 shadow border border-base-200">
                                            <div class="card-body gap-3">
                                                <h2 class="text-xl font-semibold">{t("overview.title")}</h2>
                                                <p>{t("overview.body")}</p>
                                                <SessionBar session={session.clone()} on_logout={on_logout.clone()} />
                                            </div>
                                        </section>
                                    },
                                    _ => html! { <Redirect<Route> to={Route::Login} /> },
                                },
                                Route::NotFound => html! {
                                    <p class="text-base-content/60">{t("app.not_found")}</p>
                                },
                            }
                        }} />
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MeshscopeApp>::with_root(root).render();
    } else {
        yew::Renderer::<MeshscopeApp>::new().render();
    }
}
