use std::sync::Arc;

use tokio::sync::Notify;

use calendar_events::shell::config::AppConfig;
use calendar_events::shell::http::router;
use calendar_events::shell::state::AppState;
use calendar_events::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init();
    if let Err(error) = dotenv {
        tracing::warn!(%error, "no .env file loaded, using environment and defaults");
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        source = ?config.source,
        address = %config.http_address,
        timeout_ms = config.request_timeout.as_millis() as u64,
        idle_timeout_ms = config.idle_timeout.as_millis() as u64,
        "configuration loaded"
    );

    // In-memory store for now
    let app = router(AppState::in_memory(), config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.http_address).await?;
    tracing::info!("HTTP endpoint: http://{}", config.http_address);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.http_address);

    let shutdown = Arc::new(Notify::new());
    let serve = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = shutdown.clone();
        async move { shutdown.notified().await }
    });
    let mut server = tokio::spawn(async move { serve.await });

    tokio::select! {
        joined = &mut server => return Ok(joined??),
        () = shutdown_signal() => shutdown.notify_one(),
    }

    // Open connections get `idle_timeout` to finish before the process exits.
    match tokio::time::timeout(config.idle_timeout, server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(
            idle_timeout_ms = config.idle_timeout.as_millis() as u64,
            "connections still open after the idle timeout, exiting"
        ),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
