// HTTP handlers, one module per resource

pub mod chat;
pub mod health;
pub mod invitations;
pub mod planning;
pub mod realtime;
pub mod teams;

use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::Session;
use crate::domain::team::{Team, TeamMember};
use crate::domain::user::Email;

/// The session's email as a domain value
///
/// Team access is keyed by email, so sessions without one are refused.
pub(crate) fn session_email(session: &Session) -> Result<Email, ApiError> {
    session
        .email
        .as_deref()
        .and_then(|email| Email::new(email).ok())
        .ok_or_else(|| ApiError::forbidden("Session has no email address"))
}

/// Loads a team the caller belongs to
///
/// Unknown teams and teams the caller is not a member of look the same.
pub(crate) async fn member_team(
    state: &AppState,
    session: &Session,
    team_id: Uuid,
) -> Result<(Team, TeamMember), ApiError> {
    let email = session_email(session)?;

    let membership = state.teams.find_member(team_id, &email).await?;
    let team = state.teams.find_by_id(team_id).await?;

    match (team, membership) {
        (Some(team), Some(member)) => Ok((team, member)),
        _ => Err(ApiError::not_found("Team not found")),
    }
}
