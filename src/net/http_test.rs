use super::*;
use std::cell::RefCell;

use crate::util::storage::MemoryStore;

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

struct Fixture {
    client: HttpClient,
    store: Rc<MemoryStore>,
    navigator: Rc<RecordingNavigator>,
}

fn fixture(base_url: &str) -> Fixture {
    let config = AppConfig { api_base_url: base_url.to_owned(), ..AppConfig::default() };
    let store = Rc::new(MemoryStore::new());
    let navigator = Rc::new(RecordingNavigator::default());
    let client = HttpClient::new(&config, store.clone(), navigator.clone());
    Fixture { client, store, navigator }
}

// =============================================================
// URL building
// =============================================================

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("http://h/api", "/auth/me"), "http://h/api/auth/me");
    assert_eq!(endpoint_url("http://h/api/", "auth/me"), "http://h/api/auth/me");
}

#[test]
fn client_uses_configured_base_url() {
    let fx = fixture("https://api.example.com");
    assert_eq!(fx.client.base_url(), "https://api.example.com");
    let req = fx.client.prepare(Method::Get, "/auth/me", None);
    assert_eq!(req.url, "https://api.example.com/auth/me");
}

// =============================================================
// Outgoing interception
// =============================================================

#[test]
fn prepare_without_token_sends_unauthenticated() {
    let fx = fixture("http://h/api");
    let req = fx.client.prepare(Method::Post, "/auth/login", Some("{}".to_owned()));
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.authorization, None);
    assert_eq!(req.body.as_deref(), Some("{}"));
}

#[test]
fn prepare_attaches_bearer_token_when_stored() {
    let fx = fixture("http://h/api");
    session_token::set_access_token(fx.store.as_ref(), "fake-jwt-token-123");
    let req = fx.client.prepare(Method::Get, "/auth/me", None);
    assert_eq!(req.authorization.as_deref(), Some("Bearer fake-jwt-token-123"));
}

#[test]
fn prepare_reads_token_fresh_on_every_request() {
    let fx = fixture("http://h/api");
    session_token::set_access_token(fx.store.as_ref(), "one");
    assert_eq!(fx.client.prepare(Method::Get, "/a", None).authorization.as_deref(), Some("Bearer one"));
    session_token::remove_access_token(fx.store.as_ref());
    assert_eq!(fx.client.prepare(Method::Get, "/a", None).authorization, None);
}

// =============================================================
// Incoming interception
// =============================================================

#[test]
fn success_statuses_pass_through() {
    let fx = fixture("http://h/api");
    assert_eq!(fx.client.intercept_response(200, "{}"), Ok(()));
    assert_eq!(fx.client.intercept_response(204, ""), Ok(()));
    assert!(fx.navigator.visits.borrow().is_empty());
}

#[test]
fn unauthorized_clears_token_and_redirects_to_login() {
    let fx = fixture("http://h/api");
    session_token::set_access_token(fx.store.as_ref(), "stale");
    session_token::set_persisted_user(
        fx.store.as_ref(),
        &crate::net::types::User {
            id: "1".to_owned(),
            email: "a@b.c".to_owned(),
            name: "A".to_owned(),
            avatar: None,
        },
    );

    let result = fx.client.intercept_response(401, "");
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(session_token::get_access_token(fx.store.as_ref()), None);
    assert!(session_token::get_persisted_user(fx.store.as_ref()).is_some());
    assert_eq!(*fx.navigator.visits.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn other_errors_carry_server_message() {
    let fx = fixture("http://h/api");
    let result = fx.client.intercept_response(422, r#"{"message":"Email already registered"}"#);
    assert_eq!(
        result,
        Err(ApiError::Status { status: 422, message: Some("Email already registered".to_owned()) })
    );
    assert!(fx.navigator.visits.borrow().is_empty());
}

#[test]
fn other_errors_without_json_body_have_no_message() {
    let fx = fixture("http://h/api");
    let result = fx.client.intercept_response(500, "<html>oops</html>");
    assert_eq!(result, Err(ApiError::Status { status: 500, message: None }));
}

// =============================================================
// Transport outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn send_is_unavailable_without_csr() {
    let fx = fixture("http://h/api");
    let result: Result<serde_json::Value, ApiError> = fx.client.get("/auth/me").await;
    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(fx.client.post_empty("/auth/logout").await, Err(ApiError::Unavailable));
}
