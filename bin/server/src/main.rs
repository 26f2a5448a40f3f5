#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use codex_tutorial_identity::HostedIdentityProvider;
    use codex_tutorial_server::{auth::AppState, config::ServerConfig, site};
    use leptos::prelude::get_configuration;
    use std::sync::Arc;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!(
        public_url = %config.public_url,
        userinfo_url = %config.provider.userinfo_url(),
        "Loaded configuration"
    );

    let provider = HostedIdentityProvider::new(config.provider.clone())
        .expect("failed to build identity provider client");
    let app_state = Arc::new(AppState::new(
        Arc::new(provider),
        config.provider,
        config.public_url,
    ));

    let leptos_options = get_configuration(None)
        .expect("failed to get leptos configuration")
        .leptos_options;
    let addr = leptos_options.site_addr;
    let app = site::router(leptos_options, app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind to address");
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutting down");
        })
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Hydration entry point lives in lib.rs
}
