use std::sync::Arc;

use actix_web::{
    Responder, get,
    web::{self},
};
use common::{error::Res, http::Success, jwt::JwtClaims, tenant::TenantScope};
use sqlx::PgPool;

use crate::{dtos::report::RecentReportsResponse, service};

/// The 10 most recently generated reports for the caller's organization,
/// newest first.
#[get("/recent")]
pub async fn get_recent(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let scope = TenantScope::from_claims(&claims)?;
    let reports = service::report::recent_reports(&pool, &scope).await?;
    Success::ok(RecentReportsResponse { reports })
}
