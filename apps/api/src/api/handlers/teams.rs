use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{member_team, session_email};
use crate::api::errors::ApiError;
use crate::api::middleware::AuthSession;
use crate::api::state::AppState;
use crate::domain::team::{Team, TeamMember};

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            description: team.description().map(str::to_string),
            created_by: team.created_by().to_string(),
            created_at: team.created_at(),
        }
    }
}

/// A team together with its roster
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    #[serde(flatten)]
    pub team: TeamResponse,
    pub members: Vec<TeamMember>,
}

/// List the caller's teams
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let email = session_email(&session)?;
    let teams = state.teams.find_by_member(&email).await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Create a team owned by the caller
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload?;
    let email = session_email(&session)?;

    let (team, owner) = Team::new(req.name, req.description, session.user_id.clone(), email)
        .map_err(ApiError::bad_request)?;

    state.teams.create(&team, &owner).await?;
    tracing::info!(team_id = %team.id(), user_id = %session.user_id, "team created");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get a team and its members
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamDetailResponse>, ApiError> {
    let (team, _) = member_team(&state, &session, id).await?;
    let members = state.teams.members(id).await?;

    Ok(Json(TeamDetailResponse {
        team: TeamResponse::from(&team),
        members,
    }))
}

/// List a team's members
///
/// GET /api/teams/:id/members
pub async fn list_members(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    member_team(&state, &session, id).await?;

    Ok(Json(state.teams.members(id).await?))
}
