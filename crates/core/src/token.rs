//! Access-token expiry inspection
//!
//! The client never validates token signatures; it only reads the
//! embedded `exp` claim to decide whether a token is worth sending.
//! A token that cannot be decoded is treated as expired, which routes
//! it through the refresh path rather than failing outright.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Extract the `exp` claim (seconds since the Unix epoch) from a JWT
/// without verifying its signature. Returns `None` for anything that
/// is not a decodable three-part token carrying an `exp`.
pub fn expires_at(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;
    Some(claim.exp)
}

/// Whether the token's expiry claim lies strictly before `now`
/// (seconds since the Unix epoch). Malformed tokens count as expired.
///
/// There is deliberately no clock-skew margin: a borderline token is
/// sent as-is and recovered reactively on a 401.
pub fn is_expired(token: &str, now: i64) -> bool {
    expires_at(token).is_none_or(|exp| exp < now)
}

/// `is_expired` against the system clock.
pub fn is_expired_now(token: &str) -> bool {
    is_expired(token, chrono::Utc::now().timestamp())
}
