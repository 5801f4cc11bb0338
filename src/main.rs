use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use voting_engine::config::Config;
use voting_engine::routes;
use voting_engine::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!(
        clips = ?config.seed.audio_clip_ids,
        "Seeding predictions"
    );
    let state = AppState::new(&config);
    let app = routes::app(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;

    info!("Voting engine running on http://{}", address);
    info!("  GET  /api/predictions - List predictions with vote counts");
    info!("  POST /api/predictions - Create a prediction");
    info!("  POST /api/votes       - Cast a vote");
    info!("  GET  /health          - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
