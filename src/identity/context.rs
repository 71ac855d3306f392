use std::sync::Arc;

use parking_lot::RwLock;

use super::service::{AuthService, LoginRequest};
use super::user::User;
use crate::error::AppResult;

/// Caller-facing session state: wraps the service with a cached current-user
/// slot so front ends read login state without re-hitting storage, mirroring
/// the provider component the dashboard wrapped around its auth service.
pub struct AuthContext {
    service: Arc<AuthService>,
    user: RwLock<Option<User>>,
}

impl AuthContext {
    /// Build the context, restoring the cached user from the stored session
    /// token. This is the once-at-startup restore read.
    pub fn new(service: Arc<AuthService>) -> Self {
        let user = service.current_user();
        Self { service, user: RwLock::new(user) }
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let req = LoginRequest { username: username.to_string(), password: password.to_string() };
        let resp = self.service.login(&req).await?;
        *self.user.write() = Some(resp.user.clone());
        Ok(resp.user)
    }

    pub fn logout(&self) {
        self.service.logout();
        *self.user.write() = None;
    }

    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn service(&self) -> &AuthService {
        &self.service
    }
}
