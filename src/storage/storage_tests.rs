use super::*;

#[test]
fn test_set_get_remove_roundtrip() {
    // Use a temp directory under target to avoid clutter; Windows-safe
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalStore::open(tmp.path()).unwrap();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.keys(), vec!["k".to_string()]);
    assert!(store.remove("k").unwrap());
    assert!(!store.remove("k").unwrap());
    assert!(store.get("k").is_none());
}

#[test]
fn test_values_survive_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let store = LocalStore::open(tmp.path()).unwrap();
        store.set("auth_token", "abc.def.ghi").unwrap();
    }
    // Fresh handle over the same directory sees the persisted entry
    let store = LocalStore::open(tmp.path()).unwrap();
    assert_eq!(store.get("auth_token").as_deref(), Some("abc.def.ghi"));
}

#[test]
fn test_corrupt_file_starts_empty() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("local.json"), b"not json {{{").unwrap();
    let store = LocalStore::open(tmp.path()).unwrap();
    assert!(store.is_empty());
    // And the store is still writable afterwards
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[test]
fn test_session_store_single_slot() {
    let tmp = tempfile::tempdir().unwrap();
    let sessions = SessionStore::new(LocalStore::open(tmp.path()).unwrap());
    assert!(sessions.load().is_none());
    sessions.save("first").unwrap();
    sessions.save("second").unwrap();
    assert_eq!(sessions.load().as_deref(), Some("second"));
    sessions.clear().unwrap();
    assert!(sessions.load().is_none());
    // Idempotent: clearing again is a no-op, not an error
    sessions.clear().unwrap();
    assert!(sessions.load().is_none());
}
