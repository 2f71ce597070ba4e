use uuid::Uuid;

use crate::{
    error::{AppError, Res},
    jwt::JwtClaims,
};

pub const ROLE_ADMIN: &str = "admin";

/// Trusted tenant context for a request. The organization id comes from the
/// verified token claims and nowhere else; every tenant-scoped query takes a
/// `TenantScope` so an unscoped query cannot be written by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantScope {
    organization_id: Uuid,
}

impl TenantScope {
    /// Fails closed: claims without an organization id cannot touch
    /// tenant-owned data.
    pub fn from_claims(claims: &JwtClaims) -> Res<Self> {
        match claims.organization_id {
            Some(organization_id) => Ok(Self { organization_id }),
            None => Err(AppError::Unauthorized(
                "Token is not bound to an organization".to_string(),
            )),
        }
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }
}

/// Admin operations re-check the role on every call; a valid signature alone
/// is not enough to cross the tenant boundary.
pub fn require_admin(claims: &JwtClaims) -> Res<()> {
    if claims.role == ROLE_ADMIN {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Admin role required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(org: Option<Uuid>, role: &str) -> JwtClaims {
        JwtClaims {
            user_id: Uuid::new_v4(),
            organization_id: org,
            role: role.to_string(),
            exp: 0,
        }
    }

    #[test]
    fn scope_comes_from_claims() {
        let org_id = Uuid::new_v4();
        let scope = TenantScope::from_claims(&claims(Some(org_id), "member")).unwrap();
        assert_eq!(scope.organization_id(), org_id);
    }

    #[test]
    fn scope_fails_closed_without_organization() {
        assert!(TenantScope::from_claims(&claims(None, "member")).is_err());
    }

    #[test]
    fn admin_role_passes_admin_check() {
        assert!(require_admin(&claims(None, ROLE_ADMIN)).is_ok());
    }

    #[test]
    fn member_role_fails_admin_check() {
        let err = require_admin(&claims(Some(Uuid::new_v4()), "member")).unwrap_err();
        assert_eq!(
            err.to_http_response().status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}
