use common::{
    error::{AppError, Res},
    tenant::TenantScope,
};
use sqlx::{Executor, Postgres};

use crate::models::product::Product;

pub async fn get_products<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &TenantScope,
) -> Res<Vec<Product>> {
    sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE organization_id = $1 ORDER BY name",
    )
    .bind(scope.organization_id())
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Clears the synced flag and all three Shopify id/url columns in a single
/// atomic statement. Returns the number of rows changed.
pub async fn unsync_shopify_products<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &TenantScope,
) -> Res<u64> {
    sqlx::query(
        r#"
        UPDATE products
        SET synced_from_shopify = FALSE,
            shopify_product_id = NULL,
            shopify_variant_id = NULL,
            shopify_image_url = NULL,
            updated_at = NOW()
        WHERE organization_id = $1
          AND synced_from_shopify = TRUE
        "#,
    )
    .bind(scope.organization_id())
    .execute(executor)
    .await
    .map(|r| r.rows_affected())
    .map_err(AppError::from)
}
