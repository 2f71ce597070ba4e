use actix_web::web;

use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}
pub mod routes {
    pub mod auth;
}
mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}
mod dtos {
    pub(crate) mod auth;
}

// Auth enforcement for protected scopes
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_register)
        .service(routes::auth::post_login)
}
