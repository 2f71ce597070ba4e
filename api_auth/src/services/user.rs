use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use common::error::{AppError, Res};
use db::dtos::user::UserCreateRequest;
use db::models::user::{AuthCredentials, User};
use sqlx::PgPool;

use crate::dtos::auth::RegisterRequest;

pub async fn exists_user_by_email(pool: &PgPool, email: &str) -> Res<bool> {
    db::user::exists_user_by_email(pool, email).await
}

/// Inserts the organization, its owner user and the owner's credentials in
/// one transaction.
pub async fn create_organization_owner(pool: &PgPool, req: &RegisterRequest) -> Res<User> {
    let mut tx = pool.begin().await?;

    let organization =
        db::organization::insert_organization(&mut *tx, &req.organization_name).await?;

    // The route's existence check races with concurrent registrations; a
    // duplicate email can still hit the unique constraint here and must
    // surface as the same 400, not a 500.
    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            organization_id: Some(organization.id),
            email: req.email.clone(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            role: "owner".to_string(),
        },
    )
    .await
    .map_err(|err| {
        if err.is_unique_violation() {
            AppError::BadRequest("User with this email already exists".to_string())
        } else {
            err
        }
    })?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    db::user::insert_user_credentials(
        &mut *tx,
        AuthCredentials {
            user_id: user.id,
            password_hash,
        },
    )
    .await?;

    tx.commit().await?;
    Ok(user)
}
