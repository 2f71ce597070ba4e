use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `synced_from_shopify = true` implies the shopify_* columns are populated;
/// unsync clears all of them in one statement.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub shopify_product_id: Option<String>,
    pub shopify_variant_id: Option<String>,
    pub shopify_image_url: Option<String>,
    pub synced_from_shopify: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
