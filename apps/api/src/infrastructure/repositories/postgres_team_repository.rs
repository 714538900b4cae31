use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{MemberRole, Team, TeamMember};
use crate::domain::user::Email;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(r.id, r.name, r.description, r.created_by, r.created_at)
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    team_id: Uuid,
    email: String,
    role: MemberRole,
    joined_at: DateTime<Utc>,
}

impl TryFrom<MemberRow> for TeamMember {
    type Error = RepositoryError;

    fn try_from(r: MemberRow) -> Result<Self, Self::Error> {
        Ok(TeamMember {
            id: r.id,
            team_id: r.team_id,
            email: Email::new(&r.email).map_err(RepositoryError::Corrupt)?,
            role: r.role,
            joined_at: r.joined_at,
        })
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: &Team, owner: &TeamMember) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.description())
        .bind(team.created_by())
        .bind(team.created_at())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO team_members (id, team_id, email, role, joined_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(owner.id)
        .bind(owner.team_id)
        .bind(owner.email.as_str())
        .bind(owner.role)
        .bind(owner.joined_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, created_by, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn find_by_member(&self, email: &Email) -> Result<Vec<Team>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT t.id, t.name, t.description, t.created_by, t.created_at
            FROM teams t
            JOIN team_members m ON m.team_id = t.id
            WHERE m.email = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(email.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, team_id, email, role, joined_at
            FROM team_members
            WHERE team_id = $1
            ORDER BY joined_at
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TeamMember::try_from).collect()
    }

    async fn find_member(
        &self,
        team_id: Uuid,
        email: &Email,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, team_id, email, role, joined_at
            FROM team_members
            WHERE team_id = $1 AND email = $2
            "#,
        )
        .bind(team_id)
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TeamMember::try_from).transpose()
    }

    async fn add_member(&self, member: &TeamMember) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO team_members (id, team_id, email, role, joined_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (team_id, email) DO NOTHING
            "#,
        )
        .bind(member.id)
        .bind(member.team_id)
        .bind(member.email.as_str())
        .bind(member.role)
        .bind(member.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let missing_team =
                matches!(&e, sqlx::Error::Database(db) if db.is_foreign_key_violation());
            if missing_team {
                RepositoryError::MissingParent {
                    entity: "Team",
                    id: member.team_id.to_string(),
                }
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(result.rows_affected() == 1)
    }
}
