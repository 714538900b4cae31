use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rsvp_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Pending,
    Accepted,
    Declined,
}

/// A person invited to an event
///
/// Guests carry their team id as well as their event id so change
/// notifications can be routed per team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Guest {
    pub id: Uuid,
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub rsvp: RsvpStatus,
}
