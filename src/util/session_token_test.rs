use super::*;
use crate::util::storage::MemoryStore;

fn alice() -> User {
    User {
        id: "1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        avatar: Some("https://img/alice.png".to_owned()),
    }
}

#[test]
fn token_round_trips_through_json_encoding() {
    let store = MemoryStore::new();
    set_access_token(&store, "fake-jwt-token-123");
    assert_eq!(store.get_raw(ACCESS_TOKEN_KEY).as_deref(), Some("\"fake-jwt-token-123\""));
    assert_eq!(get_access_token(&store).as_deref(), Some("fake-jwt-token-123"));
}

#[test]
fn raw_unencoded_token_is_used_as_is() {
    let store = MemoryStore::new();
    store.set_raw(ACCESS_TOKEN_KEY, "eyJhbGciOi.payload.sig");
    assert_eq!(get_access_token(&store).as_deref(), Some("eyJhbGciOi.payload.sig"));
}

#[test]
fn non_string_token_counts_as_absent() {
    let store = MemoryStore::new();
    store.set_raw(ACCESS_TOKEN_KEY, "null");
    assert_eq!(get_access_token(&store), None);
    store.set_raw(ACCESS_TOKEN_KEY, "123");
    assert_eq!(get_access_token(&store), None);
}

#[test]
fn remove_token_leaves_user_entry() {
    let store = MemoryStore::new();
    set_access_token(&store, "t");
    set_persisted_user(&store, &alice());
    remove_access_token(&store);
    assert_eq!(get_access_token(&store), None);
    assert_eq!(get_persisted_user(&store), Some(alice()));
}

#[test]
fn persisted_user_round_trips_field_for_field() {
    let store = MemoryStore::new();
    set_persisted_user(&store, &alice());
    assert_eq!(get_persisted_user(&store), Some(alice()));
}

#[test]
fn double_encoded_user_is_accepted() {
    let store = MemoryStore::new();
    let inner = serde_json::to_string(&alice()).unwrap();
    storage::set(&store, USER_KEY, &inner);
    assert_eq!(get_persisted_user(&store), Some(alice()));
}

#[test]
fn malformed_user_reads_as_none() {
    let store = MemoryStore::new();
    store.set_raw(USER_KEY, r#"{"id":"1"}"#);
    assert_eq!(get_persisted_user(&store), None);
    store.set_raw(USER_KEY, "garbage");
    assert_eq!(get_persisted_user(&store), None);
}

#[test]
fn remove_user_leaves_token_entry() {
    let store = MemoryStore::new();
    set_access_token(&store, "t");
    set_persisted_user(&store, &alice());
    remove_persisted_user(&store);
    assert_eq!(get_persisted_user(&store), None);
    assert_eq!(get_access_token(&store).as_deref(), Some("t"));
}
