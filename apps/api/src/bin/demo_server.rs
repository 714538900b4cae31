//! Runs the protected-endpoint demonstration on `DEMO_PORT` (default 4000).

use std::net::SocketAddr;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenv::dotenv().ok();

    let port = match std::env::var("DEMO_PORT") {
        Ok(raw) => raw.parse::<u16>().context("DEMO_PORT must be a port number")?,
        Err(_) => 4000,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = planner_api::demo::router().layer(TraceLayer::new_for_http());

    tracing::info!("Demo server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
