use dioxus_logger::tracing::{self, Level};
use ssoready_demo::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let sso_client = startup::build_sso_client(&config)?;
    let session = startup::session_layer();

    let app = router::routes()
        .with_state(AppState::from(sso_client))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(config.address()).await?;

    tracing::info!("Listening on http://{}", config.address());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
