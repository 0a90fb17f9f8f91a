//! Routing definitions for the Meshscope console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Overview,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}
