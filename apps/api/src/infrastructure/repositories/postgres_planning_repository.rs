use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::planning::{Guest, TeamDocument, TeamEvent, TeamTask, TeamVendor};
use crate::domain::repositories::{PlanningRepository, RepositoryError};

/// PostgreSQL implementation of PlanningRepository
pub struct PostgresPlanningRepository {
    pool: PgPool,
}

impl PostgresPlanningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanningRepository for PostgresPlanningRepository {
    async fn events(&self, team_id: Uuid) -> Result<Vec<TeamEvent>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamEvent>(
            r#"
            SELECT id, team_id, name, description, location, starts_at, ends_at, budget
            FROM team_events
            WHERE team_id = $1
            ORDER BY starts_at ASC NULLS LAST, name
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_event(
        &self,
        team_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<TeamEvent>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamEvent>(
            r#"
            SELECT id, team_id, name, description, location, starts_at, ends_at, budget
            FROM team_events
            WHERE team_id = $1 AND id = $2
            "#,
        )
        .bind(team_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn guests(&self, team_id: Uuid, event_id: Uuid) -> Result<Vec<Guest>, RepositoryError> {
        let rows = sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, team_id, event_id, name, email, rsvp
            FROM guests
            WHERE team_id = $1 AND event_id = $2
            ORDER BY name
            "#,
        )
        .bind(team_id)
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn vendors(&self, team_id: Uuid) -> Result<Vec<TeamVendor>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamVendor>(
            r#"
            SELECT id, team_id, event_id, name, category, contact_email, cost
            FROM team_vendors
            WHERE team_id = $1
            ORDER BY name
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn tasks(&self, team_id: Uuid) -> Result<Vec<TeamTask>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamTask>(
            r#"
            SELECT id, team_id, event_id, title, status, assignee_email, due_at
            FROM team_tasks
            WHERE team_id = $1
            ORDER BY due_at ASC NULLS LAST, title
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn documents(&self, team_id: Uuid) -> Result<Vec<TeamDocument>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamDocument>(
            r#"
            SELECT id, team_id, name, url, uploaded_by, uploaded_at
            FROM team_documents
            WHERE team_id = $1
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
