use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services;

/// Registers a new organization together with its owner user.
///
/// # Input
/// - `req`: JSON payload with organization name, email, password and names
///
/// # Output
/// - Success: 201 Created with a token and the created user
/// - Error: 400 Bad Request if the email is already taken
#[post("/register")]
pub async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let email_exists = services::user::exists_user_by_email(pg_pool, &req.email).await?;
    if email_exists {
        return Err(AppError::BadRequest(
            "User with this email already exists".to_string(),
        ));
    }

    let user = services::user::create_organization_owner(pg_pool, &req.into_inner()).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            organization_id: user.organization_id,
            role: user.role.clone(),
        },
        &config.jwt_config,
    )?;
    Success::created(AuthResponse { token, user })
}

/// Authenticates a user with email and password.
///
/// # Output
/// - Success: auth response with JWT token and user details
/// - Error: 401 Unauthorized for invalid credentials
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    db::user::touch_last_login(pg_pool, user.id).await?;

    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            organization_id: user.organization_id,
            role: user.role.clone(),
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse { token, user })
}
