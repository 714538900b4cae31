use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::member_team;
use crate::api::errors::ApiError;
use crate::api::middleware::AuthSession;
use crate::api::state::AppState;
use crate::domain::planning::{
    BudgetSummary, Guest, TeamDocument, TeamEvent, TeamTask, TeamVendor,
};

/// GET /api/teams/:id/events
pub async fn list_events(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamEvent>>, ApiError> {
    member_team(&state, &session, team_id).await?;
    Ok(Json(state.planning.events(team_id).await?))
}

/// GET /api/teams/:id/events/:event_id/guests
pub async fn list_guests(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path((team_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<Guest>>, ApiError> {
    member_team(&state, &session, team_id).await?;
    find_event(&state, team_id, event_id).await?;

    Ok(Json(state.planning.guests(team_id, event_id).await?))
}

/// Budget against committed vendor spend for one event
///
/// GET /api/teams/:id/events/:event_id/budget
pub async fn event_budget(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path((team_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<BudgetSummary>, ApiError> {
    member_team(&state, &session, team_id).await?;
    let event = find_event(&state, team_id, event_id).await?;
    let vendors = state.planning.vendors(team_id).await?;

    Ok(Json(BudgetSummary::for_event(&event, &vendors)))
}

/// GET /api/teams/:id/vendors
pub async fn list_vendors(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamVendor>>, ApiError> {
    member_team(&state, &session, team_id).await?;
    Ok(Json(state.planning.vendors(team_id).await?))
}

/// GET /api/teams/:id/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamTask>>, ApiError> {
    member_team(&state, &session, team_id).await?;
    Ok(Json(state.planning.tasks(team_id).await?))
}

/// GET /api/teams/:id/documents
pub async fn list_documents(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamDocument>>, ApiError> {
    member_team(&state, &session, team_id).await?;
    Ok(Json(state.planning.documents(team_id).await?))
}

async fn find_event(state: &AppState, team_id: Uuid, event_id: Uuid) -> Result<TeamEvent, ApiError> {
    state
        .planning
        .find_event(team_id, event_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))
}
