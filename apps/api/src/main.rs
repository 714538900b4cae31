use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use planner_api::api::{self, AppState};
use planner_api::chat::OpenAiChatClient;
use planner_api::config::AppConfig;
use planner_api::infrastructure::database;
use planner_api::infrastructure::repositories::{
    PostgresPlanningRepository, PostgresTeamRepository,
};
use planner_api::realtime::{spawn_change_listener, ChangeFeed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fails fast on missing variables
    let config = AppConfig::from_env().context("invalid configuration")?;

    let pool = database::connect_lazy(&config.database).context("invalid DATABASE_URL")?;

    tracing::info!("Applying migrations...");
    database::migrate(&pool)
        .await
        .context("failed to apply migrations")?;
    tracing::info!("Database ready");

    let changes = ChangeFeed::new();
    spawn_change_listener(pool.clone(), Arc::clone(&changes));

    let state = AppState {
        auth: Arc::new(config.auth.clone()),
        teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
        planning: Arc::new(PostgresPlanningRepository::new(pool)),
        chat: Arc::new(OpenAiChatClient::new(&config.llm)),
        changes,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
