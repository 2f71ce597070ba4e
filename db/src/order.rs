use common::{
    error::{AppError, Res},
    tenant::TenantScope,
};
use sqlx::{Executor, Postgres};

use crate::models::order::TopProductRow;

/// Revenue and unit totals per product over orders created in the last
/// `days` days, highest revenue first. Totals come from the order items'
/// frozen unit_price and quantity; products with no sales in the window
/// appear with zeros.
pub async fn top_products<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &TenantScope,
    days: i32,
) -> Res<Vec<TopProductRow>> {
    sqlx::query_as::<_, TopProductRow>(
        r#"
        SELECT p.id AS product_id, p.name,
               COALESCE(SUM(s.unit_price * s.quantity), 0) AS revenue,
               COALESCE(SUM(s.quantity), 0)::BIGINT AS units
        FROM products p
        LEFT JOIN (
            SELECT oi.product_id, oi.unit_price, oi.quantity
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            WHERE o.organization_id = $1
              AND o.created_at >= NOW() - ($2 * INTERVAL '1 day')
        ) s ON s.product_id = p.id
        WHERE p.organization_id = $1
        GROUP BY p.id, p.name
        ORDER BY revenue DESC, p.name
        "#,
    )
    .bind(scope.organization_id())
    .bind(days)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
