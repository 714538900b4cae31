use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::MemberRole;
use crate::domain::user::Email;

/// Membership of one email address in one team
///
/// Membership is keyed by email rather than user id so that an invitation
/// can be accepted before the invitee's first sign-in is mirrored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Uuid,
    pub email: Email,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Creates a new membership row joined now
    pub fn new(team_id: Uuid, email: Email, role: MemberRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            email,
            role,
            joined_at: Utc::now(),
        }
    }
}
