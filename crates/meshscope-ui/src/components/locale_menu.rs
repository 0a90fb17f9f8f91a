//! Locale switcher shown in the top bar.
//!
//! # Design
//! - Keep presentation focused on UI; selection state is managed by the caller.
//! - Avoid side effects inside the component; emit selected locale via callback.

use crate::i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub label: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    html! {
        <div class="join" role="group" aria-label={props.label.clone()}>
            {for LocaleCode::all().iter().map(|lc| {
                let next = *lc;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(next));
                let active = next == props.locale;
                html! {
                    <button
                        type="button"
                        class={classes!("btn", "btn-sm", "join-item", active.then_some("btn-active"))}
                        aria-pressed={active.to_string()}
                        lang={next.code()}
                        onclick={onclick}>
                        {next.label()}
                    </button>
                }
            })}
        </div>
    }
}
