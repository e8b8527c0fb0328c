use crate::providers::config::AppConfig;
use crate::providers::identity::Identity;
use actix_web::{
    dev::HttpServiceFactory,
    http::{header::HeaderMap, StatusCode},
    test::{self, TestRequest},
    web, App, HttpMessage,
};

#[derive(Clone)]
pub struct WebData {
    pub config: Option<AppConfig>,
    pub db: Option<mongodb::Database>,
    pub auth: Option<Identity>,
}

pub struct IntegrationTestResponse {
    pub status: StatusCode,
    pub body: Option<serde_json::Value>,
    pub headers: HeaderMap,
}

pub async fn perform_integration_test<C: HttpServiceFactory + 'static>(
    controller: C,
    req: TestRequest,
    web_data: WebData,
) -> Result<IntegrationTestResponse, anyhow::Error> {
    let req_builder = req.to_request();

    // build the app with the app config and db
    let mut app_builder = web::scope("");

    if let Some(config) = web_data.config {
        app_builder = app_builder.app_data(web::Data::new(config));
    }

    if let Some(db) = web_data.db {
        app_builder = app_builder.app_data(web::Data::new(db));
    }

    if let Some(auth) = web_data.auth {
        req_builder.extensions_mut().insert(auth);
    }

    // initialize the app
    let app = test::init_service(App::new().service(app_builder.service(controller))).await;

    // call the service
    let resp = test::call_service(&app, req_builder).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body_bytes = test::read_body(resp).await;
    let body = serde_json::from_slice::<serde_json::Value>(&body_bytes).ok();

    Ok(IntegrationTestResponse {
        status,
        body,
        headers,
    })
}

pub fn get_app_config() -> AppConfig {
    AppConfig {
        host: "http://localhost:5000".to_string(),
        port: 5000,
        mongo_url: std::env::var("TEST_MONGO_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        database_name: Some("bootcamp_test".to_string()),
        jwt_secret: "jwt_secret".to_string(),
        jwt_expiry: Some(3600),
        cookie_expire_days: Some(30),
        cookie_secure: Some(false),
        enable_docs: Some(false),
        file_upload_path: Some("/tmp".to_string()),
        max_file_upload: Some(1_000_000),
        geocoder_url: None,
        mail_api_url: None,
        mail_api_key: None,
        mail_from: None,
    }
}

/// Whether a mongodb instance is reachable for tests that hit the database.
/// Tests that need one return early when it is not.
pub fn db_available() -> bool {
    std::env::var("TEST_MONGO_URL").is_ok()
}

/// The driver connects lazily, so building a handle performs no i/o. Tests
/// that fail before their first query can use this without a running
/// database.
pub async fn get_db(app_config: &AppConfig) -> mongodb::Database {
    let client = mongodb::Client::with_uri_str(&app_config.mongo_url)
        .await
        .expect("Failed to parse mongodb url");
    client.database(&app_config.database_name())
}
