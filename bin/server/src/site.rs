//! Axum router and HTML shell for the site.

use crate::app::App;
use crate::auth::{self, AppState};
use crate::triggers::{ACCOUNT_PATH, SIGN_IN_PATH, SIGN_OUT_PATH};
use axum::{Extension, Router, extract::FromRef, routing::get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use leptos_meta::MetaTags;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Router state: Leptos options for rendering, app state for hand-off routes.
#[derive(Clone, FromRef)]
pub struct SiteState {
    pub leptos_options: LeptosOptions,
    pub app_state: Arc<AppState>,
}

/// Builds the full site: provider hand-off routes, the Leptos app and its
/// static assets.
///
/// Server functions read [`AppState`] from a request extension.
pub fn router(leptos_options: LeptosOptions, app_state: Arc<AppState>) -> Router {
    let pkg_dir = format!("{}/{}", leptos_options.site_root, leptos_options.site_pkg_dir);
    let pkg_route = format!("/{}", leptos_options.site_pkg_dir);
    let state = SiteState {
        leptos_options: leptos_options.clone(),
        app_state: app_state.clone(),
    };

    Router::new()
        .route(SIGN_IN_PATH, get(auth::sign_in))
        .route(SIGN_OUT_PATH, get(auth::sign_out))
        .route(ACCOUNT_PATH, get(auth::account))
        .leptos_routes(&state, generate_route_list(App), move || {
            shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<SiteState, _>(shell))
        .nest_service(&pkg_route, ServeDir::new(pkg_dir))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Document shell the app hydrates into.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
