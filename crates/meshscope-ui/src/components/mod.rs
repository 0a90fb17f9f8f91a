pub(crate) mod locale_menu;
pub(crate) mod session_bar;
