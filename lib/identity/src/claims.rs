//! OIDC UserInfo claims.

use codex_tutorial_core::DisplayIdentity;
use serde::{Deserialize, Serialize};

/// Standard claims returned by a UserInfo endpoint.
///
/// Only the claims needed for a display identity are kept; anything else the
/// provider sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoClaims {
    /// The subject claim (unique user identifier at the provider).
    pub sub: String,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Shorthand name, used when `name` is absent.
    #[serde(default)]
    pub preferred_username: Option<String>,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserInfoClaims {
    /// Converts the claims into a display identity.
    #[must_use]
    pub fn into_display_identity(self) -> DisplayIdentity {
        let name = self.name.or(self.preferred_username);
        DisplayIdentity::new(name, self.picture)
    }
}
