//! # portal
//!
//! Leptos + WASM single-page shell: static routing, a guarded home page, and
//! a client-side session persisted in `localStorage`.
//!
//! Browser-only code sits behind the `csr` feature. The session state
//! machine, storage adapter, HTTP interception and route table build and test
//! natively without it.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Id of the element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("mount point #{0} not found in document")]
    MissingRoot(&'static str),
}

/// Mount `App` into the `#root` element.
///
/// # Errors
///
/// Returns [`MountError::MissingRoot`] when the page has no such element.
#[cfg(feature = "csr")]
pub fn mount(config: config::AppConfig) -> Result<(), MountError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use app::App;

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(MountError::MissingRoot(ROOT_ELEMENT_ID))?;

    leptos::mount::mount_to(root, move || view! { <App config=config.clone()/> }).forget();
    Ok(())
}

/// WASM entry point: logging, panic hook, config, then mount.
///
/// A missing mount point aborts startup by throwing to JS.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("config: {e}; falling back to defaults");
    }
    log::info!("portal: starting (api {}, mock auth {})", config.api_base_url, config.mock_auth);

    if let Err(e) = mount(config) {
        log::error!("portal: {e}");
        wasm_bindgen::throw_str(&e.to_string());
    }
}
