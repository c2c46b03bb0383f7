//! Static route table.
//!
//! ARCHITECTURE
//! ============
//! The table is the only route declaration. `app` hands every path to
//! `resolve` and wraps protected pages in `RequireAuth`, so guard coverage
//! follows the `access` column here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Whether a route requires a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// Page a path resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    NotFound,
}

#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub page: Page,
    pub access: Access,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: HOME_PATH, page: Page::Home, access: Access::Protected },
    RouteDef { path: LOGIN_PATH, page: Page::Login, access: Access::Public },
];

/// Resolve `path` against the table; unknown paths hit the public
/// not-found page.
pub fn resolve(path: &str) -> RouteDef {
    let normalized = match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    };
    ROUTES
        .iter()
        .copied()
        .find(|route| route.path == normalized)
        .unwrap_or(RouteDef { path: "*", page: Page::NotFound, access: Access::Public })
}
