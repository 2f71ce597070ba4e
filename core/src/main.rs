mod cors;

use actix_web::{
    App, HttpRequest, HttpServer,
    error::{JsonPayloadError, PathError},
    web::{self},
};
use common::{env_config::Config, error::AppError};

// Malformed bodies and path segments fail extraction before any handler
// runs; route them through AppError so every 400 carries the same
// { "error": message } envelope as handler errors.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection (creates the database and runs migrations)
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");
    let shutdown_pool = pool.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .wrap(logger::middleware()) // 3rd
            .wrap(extractor::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(api_auth::mount_auth())
            .service(
                web::scope("")
                    .wrap(api_auth::auth_middleware())
                    .service(api_admin::mount_admin())
                    .service(api_products::mount_products())
                    .service(api_products::mount_shopify())
                    .service(api_reports::mount_analytics())
                    .service(api_reports::mount_reports()),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await?;

    // drain pool connections before exit
    shutdown_pool.close().await;
    Ok(())
}
