use actix_web::{HttpMessage, HttpResponse, dev::ServiceRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    env_config::JwtConfig,
    error::{AppError, Res},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims {
    pub user_id: Uuid,
    /// None for platform admins, who are not bound to a single organization.
    pub organization_id: Option<Uuid>,
    pub role: String,
    pub exp: usize,
}

pub struct ClaimsSpec {
    pub user_id: Uuid,
    pub organization_id: Option<Uuid>,
    pub role: String,
}

/// Generates JWT token based on user object and JWT configuration options
pub fn generate_jwt(spec: ClaimsSpec, config: &JwtConfig) -> Res<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.expiration_hours))
        .expect("valid timestamp")
        .timestamp();

    let claims = JwtClaims {
        user_id: spec.user_id,
        organization_id: spec.organization_id,
        role: spec.role,
        exp: expiration as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::from)
}

/// Extracts claims object from JWT token.
/// Requires JWT secret. Only HS256-signed tokens are accepted; a token
/// carrying any other `alg` header fails validation.
pub fn validate_jwt(token: &str, secret: &str) -> Res<JwtClaims> {
    let token_data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(token_data.claims)
}

pub fn get_jwt_claims_or_error(req: &ServiceRequest) -> Result<JwtClaims, HttpResponse> {
    if let Some(jwt_claims_res) = req.extensions().get::<Res<JwtClaims>>() {
        match jwt_claims_res {
            Ok(claims) => Ok(claims.clone()),
            Err(app_error) => Err(app_error.to_http_response()),
        }
    } else {
        Err(
            AppError::Unauthorized("No authorization token provided".to_string())
                .to_http_response(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "warehouse-test-secret".to_string(),
            expiration_hours: 24,
        }
    }

    fn spec(org: Option<Uuid>, role: &str) -> ClaimsSpec {
        ClaimsSpec {
            user_id: Uuid::new_v4(),
            organization_id: org,
            role: role.to_string(),
        }
    }

    #[test]
    fn round_trip_preserves_claims() {
        let config = test_config();
        let org_id = Uuid::new_v4();
        let spec = spec(Some(org_id), "member");
        let user_id = spec.user_id;

        let token = generate_jwt(spec, &config).unwrap();
        let claims = validate_jwt(&token, &config.secret).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.organization_id, Some(org_id));
        assert_eq!(claims.role, "member");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = generate_jwt(spec(None, "admin"), &config).unwrap();
        assert!(validate_jwt(&token, "some-other-secret").is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(validate_jwt("not.a.jwt", &test_config().secret).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        let claims = JwtClaims {
            user_id: Uuid::new_v4(),
            organization_id: None,
            role: "member".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_jwt(&token, &config.secret).is_err());
    }

    #[test]
    fn non_hs256_algorithm_is_rejected() {
        let config = test_config();
        let claims = JwtClaims {
            user_id: Uuid::new_v4(),
            organization_id: None,
            role: "member".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_jwt(&token, &config.secret).is_err());
    }
}
