// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use handlers::{chat, health, invitations, planning, realtime, teams};
pub use state::AppState;

/// Builds the application router
///
/// Every route passes through the session gate; only allow-listed paths
/// are reachable without a session.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/api/teams/accept-invitation",
            post(invitations::accept_invitation),
        )
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id/members", get(teams::list_members))
        // Planning routes
        .route("/api/teams/:id/events", get(planning::list_events))
        .route(
            "/api/teams/:id/events/:event_id/guests",
            get(planning::list_guests),
        )
        .route(
            "/api/teams/:id/events/:event_id/budget",
            get(planning::event_budget),
        )
        .route("/api/teams/:id/vendors", get(planning::list_vendors))
        .route("/api/teams/:id/tasks", get(planning::list_tasks))
        .route("/api/teams/:id/documents", get(planning::list_documents))
        // Live updates
        .route(
            "/api/teams/:id/changes/:table",
            get(realtime::subscribe_changes),
        )
        // Assistant
        .route("/api/chat", post(chat::chat))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::require_session,
        ))
        .with_state(state)
}
