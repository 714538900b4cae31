use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier the team works with, optionally booked for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamVendor {
    pub id: Uuid,
    pub team_id: Uuid,
    pub event_id: Option<Uuid>,
    pub name: String,
    pub category: Option<String>,
    pub contact_email: Option<String>,
    /// Agreed cost; counts against the booked event's budget
    pub cost: Option<Decimal>,
}
