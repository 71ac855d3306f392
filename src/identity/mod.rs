//! Central identity and session handling for dashauth.
//! Keep the public surface thin and split implementation across sub-modules.

mod user;
mod directory;
mod token;
mod service;
mod context;

pub use user::{Role, User};
pub use directory::{UserDirectory, MOCK_PASSWORD};
pub use token::{Claims, SessionToken, decode, mint};
pub use service::{AuthService, LoginRequest, LoginResponse};
pub use context::AuthContext;

#[cfg(test)]
mod identity_tests;
