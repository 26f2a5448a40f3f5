//! Code X Tutorial web server and landing page.
//!
//! This crate provides the Leptos-based landing page and the thin axum
//! layer that hands sign-in and sign-out off to the hosted identity provider.

#![allow(non_snake_case)]

pub mod app;
pub mod error;
pub mod pages;
pub mod triggers;
pub mod user;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
