use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// unit_price and quantity are the values at time of sale.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub unit_price: f64,
    pub quantity: i32,
}

/// Aggregate row for the top-products query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TopProductRow {
    pub product_id: Uuid,
    pub name: String,
    pub revenue: f64,
    pub units: i64,
}
