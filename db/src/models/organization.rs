use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub suspended: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Organization row joined with counts of the entities it owns.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OrganizationSummary {
    pub id: Uuid,
    pub name: String,
    pub suspended: bool,
    pub created_at: NaiveDateTime,
    pub user_count: i64,
    pub product_count: i64,
    pub order_count: i64,
}
