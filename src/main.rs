mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, token::JwtIssuer,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "commerce_api=info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let issuer = Arc::new(JwtIssuer::new(config.jwt_secret.as_bytes()));

    let app = router::router(&config)?.with_state(AppState::new(db, issuer, config.clone()));

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
