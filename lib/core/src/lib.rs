//! Core domain types for the Code X Tutorial site.
//!
//! This crate holds the pieces every other crate agrees on:
//! - [`AuthState`]: what the external identity provider says about the visitor
//! - [`AuthStateSource`] / [`AuthStateChannel`]: an explicit subscription
//!   interface for AuthState updates
//! - [`Clock`]: the current date, injectable for rendering and tests
//!
//! It compiles for both the server and the hydrated WASM client, so it
//! depends on nothing runtime-specific.

pub mod auth_state;
pub mod clock;
pub mod error;
pub mod observer;

pub use auth_state::{AuthPhase, AuthState, DisplayIdentity};
pub use clock::{Clock, ClockHandle, FixedClock, SystemClock};
pub use error::Result;
pub use observer::{AuthStateChannel, AuthStateSource, Observer, Subscription};
