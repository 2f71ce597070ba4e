use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures::future::{Ready, ok};

use common::jwt::{JwtClaims, get_jwt_claims_or_error};

/// Rejects requests whose extensions carry no valid claims (the extractor
/// middleware runs earlier and performs the actual token verification).
/// Valid claims are re-inserted as plain `JwtClaims` so handlers can take
/// `web::ReqData<JwtClaims>`.
pub struct AuthMiddleware {}

impl AuthMiddleware {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for AuthMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            match get_jwt_claims_or_error(&req) {
                Ok(claims) => {
                    req.extensions_mut().insert::<JwtClaims>(claims);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                Err(response) => Ok(req.into_response(response)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, HttpResponse, Responder, test, web};
    use common::{
        env_config::{Config, JwtConfig},
        jwt::{ClaimsSpec, JwtClaims, generate_jwt},
    };
    use serde_json::Value;
    use uuid::Uuid;

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            environment: "development".to_string(),
            database_url: "postgresql://localhost/unused".to_string(),
            jwt_config: JwtConfig {
                secret: "middleware-test-secret".to_string(),
                expiration_hours: 1,
            },
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            num_workers: 1,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            console_logging_enabled: false,
        })
    }

    async fn whoami(claims: web::ReqData<JwtClaims>) -> impl Responder {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": claims.user_id }))
    }

    macro_rules! protected_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .service(
                        web::scope("")
                            .wrap(crate::auth_middleware())
                            .route("/protected", web::get().to(whoami)),
                    )
                    .wrap(extractor::middleware()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn missing_token_yields_401() {
        let app = protected_app!(test_config());

        let req = test::TestRequest::get().uri("/protected").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "No authorization token provided");
    }

    #[actix_web::test]
    async fn malformed_header_yields_401() {
        let app = protected_app!(test_config());

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Token abc"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn invalid_token_yields_401() {
        let app = protected_app!(test_config());

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid token");
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler_with_claims() {
        let config = test_config();
        let app = protected_app!(config.clone());

        let user_id = Uuid::new_v4();
        let token = generate_jwt(
            ClaimsSpec {
                user_id,
                organization_id: Some(Uuid::new_v4()),
                role: "member".to_string(),
            },
            &config.jwt_config,
        )
        .unwrap();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user_id"], user_id.to_string());
    }

    #[actix_web::test]
    async fn token_signed_with_other_secret_yields_401() {
        let config = test_config();
        let app = protected_app!(config);

        let foreign = JwtConfig {
            secret: "some-other-secret".to_string(),
            expiration_hours: 1,
        };
        let token = generate_jwt(
            ClaimsSpec {
                user_id: Uuid::new_v4(),
                organization_id: None,
                role: "member".to_string(),
            },
            &foreign,
        )
        .unwrap();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
