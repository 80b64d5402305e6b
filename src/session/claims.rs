//! Unverified credential payload inspection
//!
//! Decodes the payload segment of the bearer token so views can decide which
//! controls to show. This is a display hint and nothing more: no signature
//! check, no expiry enforcement, no trust decision. The backend authorizes
//! every call independently; a forged payload here changes what renders, not
//! what the user may do.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::models::Role;

/// The subset of token claims the UI cares about
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Display hint: show admin-only controls
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|role| role.is_admin())
    }

    /// Display hint: show tournament create/edit controls
    pub fn can_manage_tournaments(&self) -> bool {
        self.role.is_some_and(|role| role.can_manage_tournaments())
    }
}

/// Decode the payload segment of a bearer token.
///
/// Returns `None` for anything that is not three dot-separated segments with
/// a base64url JSON payload. Malformed tokens grant no capabilities.
pub fn decode(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(error = %err, "unreadable token payload");
            None
        }
    }
}
