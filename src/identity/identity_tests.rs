use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::storage::{LocalStore, SessionStore};

fn service_in(dir: &std::path::Path) -> AuthService {
    let store = LocalStore::open(dir).unwrap();
    AuthService::with_parts(UserDirectory::with_defaults(), SessionStore::new(store), Duration::ZERO)
}

#[test]
fn directory_lookup_is_case_sensitive() {
    let dir = UserDirectory::with_defaults();
    assert!(dir.find_by_username("admin").is_some());
    assert!(dir.find_by_username("Admin").is_none());
    assert!(dir.find_by_username("").is_none());
    assert_eq!(dir.find_by_id("2").unwrap().username, "user1");
    assert!(dir.find_by_id("99").is_none());
}

#[test]
fn token_payload_roundtrips_through_decode() {
    let dir = UserDirectory::with_defaults();
    let admin = dir.find_by_username("admin").unwrap();
    let before = chrono::Utc::now().timestamp_millis();
    let token = mint(admin);
    // Three dot-separated segments with a constant signature tail
    let segs: Vec<&str> = token.split('.').collect();
    assert_eq!(segs.len(), 3);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id, "1");
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.role, Role::Admin);
    // exp is ~24h out, epoch millis
    let day_ms = 24 * 60 * 60 * 1000;
    assert!(claims.exp >= before + day_ms);
    assert!(claims.exp <= chrono::Utc::now().timestamp_millis() + day_ms);
}

#[test]
fn token_signature_is_not_verified() {
    let dir = UserDirectory::with_defaults();
    let user = dir.find_by_username("user1").unwrap();
    let token = mint(user);
    let mut segs: Vec<String> = token.split('.').map(|s| s.to_string()).collect();
    segs[2] = "forged-signature".to_string();
    let claims = decode(&segs.join(".")).unwrap();
    assert_eq!(claims.username, "user1");
}

#[test]
fn malformed_tokens_decode_to_errors_not_panics() {
    assert!(decode("").is_err());
    assert!(decode("only-one-segment").is_err());
    assert!(decode("a.b").is_err());
    assert!(decode("a.b.c.d").is_err());
    assert!(decode("x.!!!not-base64!!!.z").is_err());
    // Valid base64 but not claims JSON
    use base64::Engine;
    let junk = base64::engine::general_purpose::STANDARD.encode("{\"nope\":1}");
    assert!(decode(&format!("h.{}.s", junk)).is_err());
}

#[tokio::test]
async fn failed_login_leaves_session_state_unchanged() {
    let tmp = tempfile::tempdir().unwrap();
    let svc = service_in(tmp.path());

    let ok = svc
        .login(&LoginRequest { username: "admin".into(), password: MOCK_PASSWORD.into() })
        .await
        .unwrap();
    assert_eq!(ok.user.role, Role::Admin);

    let bad = svc
        .login(&LoginRequest { username: "admin".into(), password: "wrong".into() })
        .await;
    assert!(bad.is_err());
    // The earlier session is still the current one
    assert_eq!(svc.current_user().unwrap().username, "admin");
}

#[tokio::test]
async fn context_restores_user_from_stored_token() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let svc = service_in(tmp.path());
        svc.login(&LoginRequest { username: "user1".into(), password: MOCK_PASSWORD.into() })
            .await
            .unwrap();
    }
    // New context over the same data directory: restore without credentials
    let ctx = AuthContext::new(Arc::new(service_in(tmp.path())));
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.user().unwrap().username, "user1");
    ctx.logout();
    assert!(!ctx.is_authenticated());
    assert!(ctx.service().current_user().is_none());
}
