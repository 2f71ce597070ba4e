use common::{error::Res, tenant::TenantScope};
use db::models::product::Product;
use sqlx::PgPool;

pub async fn get_products(pool: &PgPool, scope: &TenantScope) -> Res<Vec<Product>> {
    db::product::get_products(pool, scope).await
}
