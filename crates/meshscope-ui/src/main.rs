#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Meshscope console binary.
//!
//! The browser build mounts the app. Native builds only exist so the login core
//! can be tested, and running one points at the wasm toolchain instead.

#[cfg(target_arch = "wasm32")]
fn main() {
    meshscope_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::io::Write;

    let notice = native_notice(meshscope_ui::i18n::DEFAULT_LOCALE);
    if std::io::stderr().lock().write_all(notice.as_bytes()).is_err() {
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::from(2)
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice(locale: meshscope_ui::i18n::LocaleCode) -> String {
    format!(
        "meshscope-ui renders the login console in a browser (default locale `{}`).\n\
         Serve it with `trunk serve` or build for `wasm32-unknown-unknown`.\n",
        locale.code()
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use meshscope_ui::i18n::LocaleCode;

    #[test]
    fn native_notice_names_target_and_locale() {
        let notice = native_notice(LocaleCode::En);
        assert!(notice.contains("wasm32-unknown-unknown"));
        assert!(notice.contains("`en`"));
        assert!(notice.ends_with('\n'));
    }
}
