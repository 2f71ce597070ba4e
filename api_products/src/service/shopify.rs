use common::{error::Res, tenant::TenantScope};
use sqlx::PgPool;

/// Clears the Shopify linkage for all of the organization's synced products
/// in one atomic update and returns how many rows changed. `store_id` names
/// the store connection being severed; the remote disconnect happens outside
/// this service.
pub async fn unsync_all(pool: &PgPool, scope: &TenantScope, store_id: &str) -> Res<u64> {
    let count = db::product::unsync_shopify_products(pool, scope).await?;
    log::info!(
        "Cleared Shopify linkage for {} products of organization {} (store {})",
        count,
        scope.organization_id(),
        store_id
    );
    Ok(count)
}
