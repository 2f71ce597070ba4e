use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::organization::{Organization, OrganizationSummary};

pub async fn list_with_counts<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<OrganizationSummary>> {
    sqlx::query_as::<_, OrganizationSummary>(
        r#"
        SELECT o.id, o.name, o.suspended, o.created_at,
               (SELECT COUNT(*) FROM users u WHERE u.organization_id = o.id) AS user_count,
               (SELECT COUNT(*) FROM products p WHERE p.organization_id = o.id) AS product_count,
               (SELECT COUNT(*) FROM orders ord WHERE ord.organization_id = o.id) AS order_count
        FROM organizations o
        ORDER BY o.created_at
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_organization<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    name: &str,
) -> Res<Organization> {
    sqlx::query_as::<_, Organization>(
        "INSERT INTO organizations (name) VALUES ($1) RETURNING *",
    )
    .bind(name)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Cascades to users, products, orders and reports via foreign keys.
/// Returns the number of organization rows removed (0 or 1).
pub async fn delete_organization<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    organization_id: Uuid,
) -> Res<u64> {
    sqlx::query("DELETE FROM organizations WHERE id = $1")
        .bind(organization_id)
        .execute(executor)
        .await
        .map(|r| r.rows_affected())
        .map_err(AppError::from)
}

/// Flips the suspension flag in one statement and returns the updated row,
/// or None when no such organization exists.
pub async fn toggle_suspended<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    organization_id: Uuid,
) -> Res<Option<Organization>> {
    sqlx::query_as::<_, Organization>(
        "UPDATE organizations SET suspended = NOT suspended, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(organization_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
