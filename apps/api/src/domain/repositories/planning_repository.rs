use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryError;
use crate::domain::planning::{Guest, TeamDocument, TeamEvent, TeamTask, TeamVendor};

/// Read access to a team's planning records
#[async_trait]
pub trait PlanningRepository: Send + Sync {
    /// Events ordered by start time, unscheduled last
    async fn events(&self, team_id: Uuid) -> Result<Vec<TeamEvent>, RepositoryError>;

    async fn find_event(
        &self,
        team_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<TeamEvent>, RepositoryError>;

    async fn guests(&self, team_id: Uuid, event_id: Uuid) -> Result<Vec<Guest>, RepositoryError>;

    async fn vendors(&self, team_id: Uuid) -> Result<Vec<TeamVendor>, RepositoryError>;

    async fn tasks(&self, team_id: Uuid) -> Result<Vec<TeamTask>, RepositoryError>;

    async fn documents(&self, team_id: Uuid) -> Result<Vec<TeamDocument>, RepositoryError>;
}
