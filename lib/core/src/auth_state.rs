//! The visitor's authentication state as reported by the identity provider.
//!
//! The site never creates or changes this state itself. The provider adapter
//! produces it and the page only reads it.

use serde::{Deserialize, Serialize};

/// Minimal user-presentable identity, populated by the identity provider.
///
/// Pages hand this to provider-owned widgets; they do not render it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayIdentity {
    /// Human readable name, if the provider shared one.
    name: Option<String>,
    /// Avatar image URL hosted by the provider.
    avatar_url: Option<String>,
}

impl DisplayIdentity {
    /// Creates a display identity.
    #[must_use]
    pub fn new(name: Option<String>, avatar_url: Option<String>) -> Self {
        Self { name, avatar_url }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the avatar URL.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

/// Whether a visitor currently has an authenticated session.
///
/// A display identity exists exactly when the visitor is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "identity", rename_all = "snake_case")]
pub enum AuthState {
    /// No valid session.
    #[default]
    SignedOut,
    /// A valid session exists for the given identity.
    SignedIn(DisplayIdentity),
}

impl AuthState {
    /// The signed-out state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::SignedOut
    }

    /// A signed-in state carrying the provider's display identity.
    #[must_use]
    pub fn signed_in(identity: DisplayIdentity) -> Self {
        Self::SignedIn(identity)
    }

    /// Returns true if a session exists.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// Returns the display identity when signed in.
    #[must_use]
    pub fn display_identity(&self) -> Option<&DisplayIdentity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::SignedOut => None,
        }
    }

    /// Returns the identity-free display phase.
    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.is_signed_in() {
            AuthPhase::SignedIn
        } else {
            AuthPhase::SignedOut
        }
    }
}

/// The two display states a page switches between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    #[default]
    SignedOut,
    SignedIn,
}

impl AuthPhase {
    /// Resolves the phase for a possibly-missing state.
    ///
    /// A missing state renders as signed out.
    #[must_use]
    pub fn resolve(state: Option<&AuthState>) -> Self {
        state.map_or(Self::SignedOut, AuthState::phase)
    }

    /// Returns the phase as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SignedOut => "signed_out",
            Self::SignedIn => "signed_in",
        }
    }
}

impl std::fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> DisplayIdentity {
        DisplayIdentity::new(
            Some("Alice".to_string()),
            Some("https://img.example.com/alice.png".to_string()),
        )
    }

    #[test]
    fn signed_out_has_no_identity() {
        let state = AuthState::signed_out();
        assert!(!state.is_signed_in());
        assert!(state.display_identity().is_none());
        assert_eq!(state.phase(), AuthPhase::SignedOut);
    }

    #[test]
    fn signed_in_exposes_identity() {
        let state = AuthState::signed_in(alice());
        assert!(state.is_signed_in());
        assert_eq!(
            state.display_identity().and_then(DisplayIdentity::name),
            Some("Alice")
        );
        assert_eq!(state.phase(), AuthPhase::SignedIn);
    }

    #[test]
    fn default_state_is_signed_out() {
        assert_eq!(AuthState::default(), AuthState::SignedOut);
        assert_eq!(AuthPhase::default(), AuthPhase::SignedOut);
    }

    #[test]
    fn missing_state_resolves_to_signed_out() {
        assert_eq!(AuthPhase::resolve(None), AuthPhase::SignedOut);
        assert_eq!(
            AuthPhase::resolve(Some(&AuthState::signed_in(alice()))),
            AuthPhase::SignedIn
        );
    }

    #[test]
    fn phase_display() {
        assert_eq!(AuthPhase::SignedOut.to_string(), "signed_out");
        assert_eq!(AuthPhase::SignedIn.to_string(), "signed_in");
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(AuthState::signed_out()).expect("serialize");
        assert_eq!(json, serde_json::json!({ "status": "signed_out" }));

        let json = serde_json::to_value(AuthState::signed_in(alice())).expect("serialize");
        assert_eq!(json["status"], "signed_in");
        assert_eq!(json["identity"]["name"], "Alice");

        let parsed: AuthState = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed, AuthState::signed_in(alice()));
    }
}
