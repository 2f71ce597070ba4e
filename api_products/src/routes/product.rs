use std::sync::Arc;

use actix_web::{
    Responder, get,
    web::{self},
};
use common::{error::Res, http::Success, jwt::JwtClaims, tenant::TenantScope};
use sqlx::PgPool;

use crate::{dtos::product::ProductListResponse, service};

/// Lists the authenticated organization's products.
#[get("")]
pub async fn get_products(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let scope = TenantScope::from_claims(&claims)?;
    let products = service::product::get_products(&pool, &scope).await?;
    Success::ok(ProductListResponse { products })
}
