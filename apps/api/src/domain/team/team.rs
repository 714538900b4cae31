use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::member::TeamMember;
use super::value_objects::MemberRole;
use crate::domain::user::Email;

/// A planning team
///
/// Groups the members who share events, vendors, tasks and documents.
///
/// # Invariants
/// - Name cannot be blank
/// - A team is created together with exactly one owner membership
///
/// # Example
/// ```
/// use planner_api::domain::team::{MemberRole, Team};
/// use planner_api::domain::user::Email;
///
/// let owner_email = Email::new("host@example.com").unwrap();
/// let (team, owner) = Team::new(
///     "Summer offsite".to_string(),
///     None,
///     "user_123".to_string(),
///     owner_email,
/// ).expect("valid team");
///
/// assert_eq!(team.name(), "Summer offsite");
/// assert_eq!(owner.role, MemberRole::Owner);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new team and its owner membership
    ///
    /// # Arguments
    /// * `name` - Display name (trimmed, cannot be blank)
    /// * `description` - Optional free text; blank becomes `None`
    /// * `created_by` - Identity provider user ID of the creator
    /// * `owner_email` - Email the owner membership is keyed by
    pub fn new(
        name: String,
        description: Option<String>,
        created_by: String,
        owner_email: Email,
    ) -> Result<(Self, TeamMember), String> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        let team = Self {
            id: Uuid::new_v4(),
            name,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            created_by,
            created_at: Utc::now(),
        };

        let owner = TeamMember::new(team.id, owner_email, MemberRole::Owner);

        Ok((team, owner))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the identity provider user ID of the creator
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation; only repository implementations should call it.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        description: Option<String>,
        created_by: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_by,
            created_at,
        }
    }
}
