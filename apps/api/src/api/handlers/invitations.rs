use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::AuthSession;
use crate::api::state::AppState;
use crate::domain::team::{MemberRole, TeamMember};
use crate::domain::user::Email;

/// Request body for accepting a team invitation
///
/// Both fields are optional at the type level so that a missing field is
/// reported as a 400 rather than a deserialization rejection. Bodies that
/// are not JSON at all get the same 400.
#[derive(Debug, Deserialize)]
pub struct AcceptInvitationRequest {
    pub team_id: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AcceptInvitationResponse {
    pub success: bool,
    pub already_member: bool,
    pub message: String,
}

/// Accept an invitation to join a team
///
/// POST /api/teams/accept-invitation
///
/// Checks for an existing membership first; only inserts when absent.
pub async fn accept_invitation(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    payload: Result<Json<AcceptInvitationRequest>, JsonRejection>,
) -> Result<Json<AcceptInvitationResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable invitation body");
        ApiError::bad_request("Missing required fields")
    })?;

    let (team_id, user_email) = match (non_blank(req.team_id), non_blank(req.user_email)) {
        (Some(team_id), Some(user_email)) => (team_id, user_email),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    let team_id = Uuid::parse_str(&team_id)
        .map_err(|_| ApiError::bad_request("Invalid team_id"))?;
    let email = Email::new(&user_email).map_err(ApiError::bad_request)?;

    if state.teams.find_member(team_id, &email).await?.is_some() {
        tracing::info!(%team_id, user_id = %session.user_id, "invitation already accepted");
        return Ok(Json(AcceptInvitationResponse {
            success: true,
            already_member: true,
            message: "Already a member".to_string(),
        }));
    }

    let member = TeamMember::new(team_id, email, MemberRole::Member);
    let inserted = state.teams.add_member(&member).await?;

    tracing::info!(
        %team_id,
        user_id = %session.user_id,
        role = %member.role,
        inserted,
        "invitation accepted"
    );

    Ok(Json(AcceptInvitationResponse {
        success: true,
        already_member: !inserted,
        message: if inserted {
            "Invitation accepted".to_string()
        } else {
            "Already a member".to_string()
        },
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
