//! Full-page navigation outside the client-side router.
//!
//! A hard redirect reloads the app, dropping every in-memory signal, so the
//! next boot rehydrates auth state from storage alone.

/// Performs document-level navigation.
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("navigation: hard redirect to {path} ignored outside the browser");
        }
    }
}
