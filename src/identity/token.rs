//! Mock session token codec.
//!
//! Tokens are shaped like a JWT (`header.payload.signature`, each segment
//! standard base64) but carry no integrity whatsoever: the signature segment is
//! a constant placeholder and is never checked on decode. Anyone can forge a
//! token by assembling the same three segments. That is faithful to the
//! dashboard mock this crate reproduces and is the reason nothing here may ever
//! guard a real resource.

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::user::{Role, User};
use crate::tprintln;

pub type SessionToken = String;

/// Payload claims carried by a session token. Key names keep wire parity with
/// the original JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub role: Role,
    /// Expiry instant, epoch milliseconds, issue time + 24h. Encoded but not
    /// enforced anywhere on read; the mock treats stored sessions as valid
    /// indefinitely.
    pub exp: i64,
}

/// Mint a token for `user`, expiring 24 hours from now (nominally; see
/// [`Claims::exp`]).
pub fn mint(user: &User) -> SessionToken {
    let header = serde_json::json!({ "alg": "HS256", "typ": "JWT" });
    let claims = Claims {
        user_id: user.id.clone(),
        username: user.username.clone(),
        role: user.role,
        exp: chrono::Utc::now().timestamp_millis() + chrono::Duration::hours(24).num_milliseconds(),
    };
    // Serializing a json! literal and a derived struct cannot fail
    let header_b64 = STANDARD.encode(header.to_string());
    let payload_b64 = STANDARD.encode(serde_json::to_string(&claims).unwrap_or_default());
    let signature_b64 = STANDARD.encode("mock-signature");
    format!("{}.{}.{}", header_b64, payload_b64, signature_b64)
}

/// Decode the payload segment of a token into typed [`Claims`].
///
/// Only structure is validated: three dot-separated segments, base64 payload,
/// JSON claims. The signature is ignored and `exp` is not compared to the
/// clock. Malformation is an error value, never a panic.
pub fn decode(token: &str) -> Result<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        bail!("malformed token: expected 3 segments, found {}", segments.len());
    }
    let payload = STANDARD
        .decode(segments[1])
        .context("malformed token: payload segment is not base64")?;
    let claims: Claims =
        serde_json::from_slice(&payload).context("malformed token: payload is not valid claims JSON")?;
    tprintln!("token.decode user_id={} username={}", claims.user_id, claims.username);
    Ok(claims)
}
