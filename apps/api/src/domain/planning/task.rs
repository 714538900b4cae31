use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamTask {
    pub id: Uuid,
    pub team_id: Uuid,
    pub event_id: Option<Uuid>,
    pub title: String,
    pub status: TaskStatus,
    pub assignee_email: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}
