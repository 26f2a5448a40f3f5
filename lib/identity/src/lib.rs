//! Adapter for the external hosted identity provider.
//!
//! The provider owns sign-in, sign-out, sessions and token verification.
//! This crate only:
//! - describes where the provider lives (`ProviderConfig`)
//! - builds the hand-off URLs for sign-in and sign-out (`redirect`)
//! - asks the provider who the current visitor is (`IdentityProvider`)
//!
//! # Example
//!
//! ```
//! use codex_tutorial_identity::{ProviderConfig, redirect};
//!
//! let config = ProviderConfig::new(
//!     "https://accounts.example.com/sign-in".to_string(),
//!     "https://accounts.example.com/sign-out".to_string(),
//!     "https://accounts.example.com/oauth/userinfo".to_string(),
//! );
//!
//! let url = redirect::sign_out_url(&config, "https://codex.example.com/")
//!     .expect("valid provider URL");
//! assert_eq!(
//!     url,
//!     "https://accounts.example.com/sign-out?redirect_url=https%3A%2F%2Fcodex.example.com%2F"
//! );
//! ```

pub mod claims;
pub mod config;
pub mod error;
pub mod provider;
pub mod redirect;

pub use claims::UserInfoClaims;
pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use error::ProviderError;
pub use provider::{HostedIdentityProvider, IdentityProvider};
