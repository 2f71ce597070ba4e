use common::{
    error::{AppError, Res},
    tenant::TenantScope,
};
use sqlx::{Executor, Postgres};

use crate::models::report::Report;

pub async fn get_recent_reports<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    scope: &TenantScope,
) -> Res<Vec<Report>> {
    sqlx::query_as::<_, Report>(
        "SELECT * FROM reports WHERE organization_id = $1 ORDER BY created_at DESC LIMIT 10",
    )
    .bind(scope.organization_id())
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
