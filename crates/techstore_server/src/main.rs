mod core;

use crate::core::router::create_router;
use crate::core::setup::setup_components;
use crate::core::state::AppState;
use anyhow::{Context, Result as AnyhowResult};
use std::sync::Arc;
use techstore_utils::color::LogColors;
use tracing::info;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down Techstore Server");
}

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    let (config, sql_client) = setup_components().await?;
    let addr = config.server_address();

    let app_state = Arc::new(AppState {
        sql_client: Arc::new(sql_client),
        config: Arc::new(config),
    });

    let app = create_router(app_state).await?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| LogColors::purple(&format!("Failed to bind to {}", addr)))?;

    info!("{}", LogColors::green(&format!("Techstore Server listening on {}", addr)));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(LogColors::purple("Server error"))?;

    Ok(())
}
