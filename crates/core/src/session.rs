//! Client-side session state
//!
//! A [`Session`] is the tuple of access token, refresh token, and a
//! denormalized user snapshot. It is either fully present or fully
//! absent; partial state is treated as absent by the token store.

use serde::{Deserialize, Serialize};
use serde_with::{BoolFromInt, serde_as};

/// Denormalized snapshot of the logged-in user, as returned by the
/// login endpoint's `credential` object. Not authoritative; the server
/// remains the source of truth.
///
/// The backend encodes its boolean flags as `0`/`1` integers.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id_user: i64,
    pub username: String,
    /// Whether the biometric profile form has been filled in.
    #[serde(rename = "have_filled_form")]
    #[serde_as(as = "BoolFromInt")]
    pub has_completed_profile: bool,
    #[serde_as(as = "BoolFromInt")]
    pub is_admin: bool,
    #[serde_as(as = "BoolFromInt")]
    pub is_active: bool,
}

/// The authenticated identity held client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived bearer credential with an embedded expiry claim.
    pub access_token: String,
    /// Longer-lived credential, opaque to the client; only ever sent
    /// to the refresh endpoint.
    pub refresh_token: String,
    pub user: UserSnapshot,
}

impl Session {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user: UserSnapshot,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user,
        }
    }
}

/// Biological gender as recorded on the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}
