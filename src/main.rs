use actix_cors::Cors;
use actix_web::{middleware::from_fn, web, App, HttpServer};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa_scalar::{Scalar, Servable};

mod controllers;
mod middlewares;

#[allow(dead_code)]
mod providers;

#[cfg(test)]
#[allow(dead_code)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // setup tracing
    tracing_subscriber::fmt::init();

    // load config
    let app_config = providers::config::load_config().unwrap_or_else(|err| {
        tracing::error!("Error loading config: {}", err);
        std::process::exit(1);
    });

    // setup docs
    let mut docs = controllers::setup_docs();
    if let Some(components) = docs.components.as_mut() {
        components.security_schemes.insert(
            "Bearer".to_string(),
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
    }
    docs.info.title = "Bootcamp API".to_string();
    docs.info.version = "1.0.0".to_string();
    docs.servers = Some(vec![utoipa::openapi::Server::new(app_config.host.clone())]);

    // setup database
    let mongodb = providers::database::setup_database(
        &app_config.mongo_url,
        &app_config.database_name(),
    )
    .await
    .unwrap_or_else(|err| {
        tracing::error!("Error setting up database: {}", err);
        std::process::exit(1);
    });

    // start server
    tracing::info!("Started server on {}/api/v1/", app_config.host);
    let port = app_config.port;
    HttpServer::new(move || {
        // json deserialization failures use the same error envelope as handlers
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let response = providers::error_response::ApiError::Validation(err.to_string())
                .to_response();
            actix_web::error::InternalError::from_response(err, response).into()
        });

        let mut app = App::new()
            .app_data(web::Data::new(app_config.clone()))
            .app_data(web::Data::new(mongodb.clone()))
            .app_data(json_config)
            .wrap(Cors::permissive());

        // api reference ui
        if app_config.enable_docs.unwrap_or(false) {
            app = app.service(Scalar::with_url("/docs", docs.clone()));
        }

        // public routes first; the nested protected scope shares the same
        // prefix and only sees requests no public route matched
        app.service(
            web::scope("/api/v1")
                .configure(controllers::setup_public_controllers)
                .service(
                    web::scope("")
                        .wrap(from_fn(middlewares::auth::auth_middleware))
                        .configure(controllers::setup_protected_controllers),
                ),
        )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
