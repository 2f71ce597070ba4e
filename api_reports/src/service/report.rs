use common::{error::Res, tenant::TenantScope};
use db::models::report::Report;
use sqlx::PgPool;

pub async fn recent_reports(pool: &PgPool, scope: &TenantScope) -> Res<Vec<Report>> {
    db::report::get_recent_reports(pool, scope).await
}
