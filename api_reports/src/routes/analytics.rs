use std::sync::Arc;

use actix_web::{
    Responder, get,
    web::{self},
};
use common::{error::Res, http::Success, jwt::JwtClaims, tenant::TenantScope};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{dtos::analytics::TopProductsResponse, service};

#[derive(Debug, Deserialize)]
pub struct TopProductsQuery {
    /// Window in days. Deserialized as a raw string so a malformed value
    /// falls back to the default window instead of failing the request.
    #[serde(rename = "timeRange")]
    pub time_range: Option<String>,
}

/// Per-product revenue and unit totals over the caller's organization's
/// orders created within the requested window.
#[get("/top-products")]
pub async fn get_top_products(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
    query: web::Query<TopProductsQuery>,
) -> Res<impl Responder> {
    let scope = TenantScope::from_claims(&claims)?;
    let days = service::analytics::resolve_time_range(query.time_range.as_deref());
    let products = service::analytics::top_products(&pool, &scope, days).await?;
    Success::ok(TopProductsResponse {
        time_range: days,
        products,
    })
}
