use common::error::{AppError, Res};
use db::models::organization::{Organization, OrganizationSummary};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list_organizations(pool: &PgPool) -> Res<Vec<OrganizationSummary>> {
    db::organization::list_with_counts(pool).await
}

pub async fn delete_organization(pool: &PgPool, organization_id: Uuid) -> Res<()> {
    let deleted = db::organization::delete_organization(pool, organization_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Organization not found".to_string()));
    }
    Ok(())
}

pub async fn toggle_suspend(pool: &PgPool, organization_id: Uuid) -> Res<Organization> {
    db::organization::toggle_suspended(pool, organization_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
}
