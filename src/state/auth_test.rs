use super::*;
use crate::util::storage::MemoryStore;

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        avatar: None,
    }
}

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    state.finish_login(AuthSession { user: alice(), access_token: "tok".to_owned() });
    state
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_idle_and_empty() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert_eq!(state.status, AuthStatus::Idle);
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&AuthStatus::Succeeded).unwrap(), "\"succeeded\"");
    assert_eq!(serde_json::from_str::<AuthStatus>("\"failed\"").unwrap(), AuthStatus::Failed);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_login_clears_error_and_keeps_identity() {
    let mut state = signed_in();
    state.fail_login("nope".to_owned());
    state.begin_login();
    assert_eq!(state.status, AuthStatus::Loading);
    assert!(state.error.is_none());
    assert_eq!(state.user, Some(alice()));
    assert_eq!(state.access_token.as_deref(), Some("tok"));
    assert!(state.is_loading());
}

#[test]
fn finish_login_sets_user_and_token() {
    let state = signed_in();
    assert_eq!(state.status, AuthStatus::Succeeded);
    assert!(state.user.is_some() && state.access_token.is_some());
    assert!(state.error.is_none());
}

#[test]
fn fail_login_records_error_and_keeps_prior_identity() {
    let mut state = signed_in();
    state.begin_login();
    state.fail_login("Invalid email or password".to_owned());
    assert_eq!(state.status, AuthStatus::Failed);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
    assert_eq!(state.user, Some(alice()));
    assert_eq!(state.access_token.as_deref(), Some("tok"));
}

#[test]
fn reset_from_every_status_yields_default() {
    let mut loading = signed_in();
    loading.begin_login();
    let mut failed = AuthState::default();
    failed.fail_login("x".to_owned());
    for mut state in [AuthState::default(), loading, signed_in(), failed] {
        state.reset();
        assert_eq!(state, AuthState::default());
    }
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn authenticated_follows_token_not_user() {
    let token_only = AuthState { access_token: Some("t".to_owned()), ..AuthState::default() };
    assert!(token_only.is_authenticated());

    let user_only = AuthState { user: Some(alice()), ..AuthState::default() };
    assert!(!user_only.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = AuthState { access_token: Some(String::new()), ..AuthState::default() };
    assert!(!state.is_authenticated());
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_from_empty_store_is_default() {
    let store = MemoryStore::new();
    assert_eq!(AuthState::hydrate(&store), AuthState::default());
}

#[test]
fn hydrate_restores_persisted_user_and_token() {
    let store = MemoryStore::new();
    session_token::set_access_token(&store, "tok");
    session_token::set_persisted_user(&store, &alice());

    let state = AuthState::hydrate(&store);
    assert_eq!(state.user, Some(alice()));
    assert_eq!(state.access_token.as_deref(), Some("tok"));
    assert_eq!(state.status, AuthStatus::Idle);
    assert!(state.is_authenticated());
}

#[test]
fn hydrate_with_token_but_no_user_is_authenticated() {
    let store = MemoryStore::new();
    session_token::set_access_token(&store, "tok");
    let state = AuthState::hydrate(&store);
    assert!(state.user.is_none());
    assert!(state.is_authenticated());
}

// =============================================================
// AuthCell
// =============================================================

#[test]
fn rc_cell_update_is_visible_in_snapshot() {
    let cell = Rc::new(RefCell::new(AuthState::default()));
    AuthCell::update(&cell, AuthState::begin_login);
    assert_eq!(cell.snapshot().status, AuthStatus::Loading);
}
