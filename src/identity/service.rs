use std::time::Duration;

use tracing::debug;

use super::directory::{MOCK_PASSWORD, UserDirectory};
use super::token;
use super::token::SessionToken;
use super::user::User;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::storage::{LocalStore, SessionStore};
use crate::tprintln;

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub user: User,
    pub token: SessionToken,
}

/// The mock authentication service: validates credential attempts against the
/// static directory, mints and persists session tokens, and resolves the stored
/// token back to a user.
///
/// Constructed once at process start and passed by reference to callers; there
/// is deliberately no module-level singleton.
pub struct AuthService {
    directory: UserDirectory,
    sessions: SessionStore,
    login_delay: Duration,
}

impl AuthService {
    /// Build the service from runtime configuration, opening the local store
    /// under the configured data directory.
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let store = LocalStore::open(&cfg.data_dir)?;
        Ok(Self::with_parts(
            UserDirectory::with_defaults(),
            SessionStore::new(store),
            cfg.login_delay,
        ))
    }

    pub fn with_parts(directory: UserDirectory, sessions: SessionStore, login_delay: Duration) -> Self {
        Self { directory, sessions, login_delay }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Authenticate a credential attempt.
    ///
    /// Sleeps for the configured mock-latency first, then matches the username
    /// exactly (case-sensitive) and compares the password against the shared
    /// [`MOCK_PASSWORD`]. Success mints a token and persists it as the current
    /// session. Unknown username and wrong password fail with the same
    /// `invalid_credentials` error so callers cannot enumerate usernames. A
    /// failed attempt leaves session state unchanged.
    ///
    /// No retries, lockout, or rate limiting: acceptable only because this is a
    /// mock.
    pub async fn login(&self, req: &LoginRequest) -> AppResult<LoginResponse> {
        tprintln!("auth.login attempt user={}", req.username);
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        let matched = self
            .directory
            .find_by_username(&req.username)
            .filter(|_| req.password == MOCK_PASSWORD);
        let Some(user) = matched else {
            debug!("login failed for '{}'", req.username);
            return Err(AppError::auth("invalid_credentials", "Invalid credentials"));
        };

        let token = token::mint(user);
        self.sessions
            .save(&token)
            .map_err(|e| AppError::io("session_store".to_string(), e.to_string()))?;
        debug!("login ok user={} role={:?}", user.username, user.role);
        Ok(LoginResponse { user: user.clone(), token })
    }

    /// Resolve the currently stored session token to a user.
    ///
    /// Empty slot, malformed token, or unknown id all read as `None`: a
    /// corrupted session is indistinguishable from no session, by contract.
    /// The token's `exp` claim is not checked here (see module docs on
    /// `identity::token`).
    pub fn current_user(&self) -> Option<User> {
        let token = self.sessions.load()?;
        let claims = match token::decode(&token) {
            Ok(c) => c,
            Err(e) => {
                debug!("stored token unreadable, treating as no session: {}", e);
                return None;
            }
        };
        self.directory.find_by_id(&claims.user_id).cloned()
    }

    /// End the current session. Idempotent: clearing an empty slot is a no-op.
    pub fn logout(&self) {
        if let Err(e) = self.sessions.clear() {
            debug!("session clear failed: {}", e);
        }
    }
}
