use dioxus_logger::tracing;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{config::Config, error::Error};

/// Build the SSOReady client from the configured API key and endpoint
pub fn build_sso_client(config: &Config) -> Result<ssoready_client::Client, Error> {
    let sso_client = ssoready_client::Client::builder()
        .api_key(&config.ssoready_api_key)
        .base_url(&config.ssoready_base_url)
        .build()?;

    Ok(sso_client)
}

/// Configure cookie sessions backed by an in-memory store
///
/// Sessions do not survive a restart.
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Resolves once Ctrl-C is received, letting in-flight requests finish before exit
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);

        // Keep serving rather than shutting down immediately
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
