//! Signed-in user summary with a logout control.

use crate::core::auth::LoginSession;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SessionBarProps {
    pub session: LoginSession,
    pub on_logout: Callback<()>,
}

#[function_component(SessionBar)]
pub(crate) fn session_bar(props: &SessionBarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };
    let expires = props
        .session
        .expires_on
        .format("%Y-%m-%d %H:%M UTC")
        .to_string();

    html! {
        <div class="flex items-center gap-3 text-sm">
            <span>{format!("{}{}", t("session.signed_in_as"), props.session.username)}</span>
            <span class="text-base-content/60">{format!("{}{expires}", t("session.expires_at"))}</span>
            <button type="button" class="btn btn-ghost btn-sm" onclick={on_logout}>
                {t("session.logout")}
            </button>
        </div>
    }
}
