use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryError;
use crate::domain::team::{Team, TeamMember};
use crate::domain::user::Email;

/// Repository trait for teams and their memberships
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team together with its owner membership, atomically
    async fn create(&self, team: &Team, owner: &TeamMember) -> Result<(), RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// Find all teams an email address belongs to, newest first
    async fn find_by_member(&self, email: &Email) -> Result<Vec<Team>, RepositoryError>;

    /// List a team's members in join order
    async fn members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError>;

    /// Find one membership row
    async fn find_member(
        &self,
        team_id: Uuid,
        email: &Email,
    ) -> Result<Option<TeamMember>, RepositoryError>;

    /// Insert a membership row unless one already exists for the pair
    ///
    /// Returns `false` when the pair was already present.
    async fn add_member(&self, member: &TeamMember) -> Result<bool, RepositoryError>;
}
