use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file shared with the team
///
/// Only the link is stored; the file itself lives in external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamDocument {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub url: String,
    pub uploaded_by: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}
