use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub report_type: String,
    pub created_at: NaiveDateTime,
}
