//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::require_auth::RequireAuth;
use crate::config::AppConfig;
use crate::net::api::{AuthApi, HttpAuthApi, MockAuthApi};
use crate::net::http::HttpClient;
use crate::pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage};
use crate::routes::{self, Access, Page};
use crate::state::auth::AuthState;
use crate::state::session::AuthController;
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// The controller as wired into the app: state lives in a signal.
pub type AppAuth = AuthController<RwSignal<AuthState>>;

/// Fetch the shared auth controller from context.
pub fn use_auth() -> AppAuth {
    expect_context::<StoredValue<AppAuth, LocalStorage>>().get_value()
}

fn build_auth_api(config: &AppConfig, store: Rc<dyn KeyValueStore>) -> Rc<dyn AuthApi> {
    if config.mock_auth {
        log::info!("auth: using local mock auth boundary");
        Rc::new(MockAuthApi::new(config.mock_latency_ms))
    } else {
        let http = HttpClient::new(config, store, Rc::new(BrowserNavigator));
        log::info!("auth: using API at {}", http.base_url());
        Rc::new(HttpAuthApi::new(http))
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Renders whatever `routes::resolve` maps the current path to, behind
/// `RequireAuth` when the entry is protected.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    move || {
        let route = routes::resolve(&location.pathname.get());
        match route.access {
            Access::Protected => view! { <RequireAuth>{move || page_view(route.page)}</RequireAuth> }.into_any(),
            Access::Public => page_view(route.page),
        }
    }
}

/// Root application component.
///
/// Hydrates auth state from storage once, then provides it to every route.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let store: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
    let auth = RwSignal::new(AuthState::hydrate(store.as_ref()));
    let api = build_auth_api(&config, Rc::clone(&store));
    let controller = AuthController::new(auth, store, api);

    provide_context(auth);
    provide_context(StoredValue::new_local(controller));

    view! {
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=RoutedPage/>
                <Route path=WildcardSegment("path") view=RoutedPage/>
            </Routes>
        </Router>
    }
}
