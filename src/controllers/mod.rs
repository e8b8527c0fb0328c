use actix_web::web;

pub mod auth;
pub mod bootcamps;
pub mod courses;
pub mod general;
pub mod reviews;
pub mod users;

pub fn setup_public_controllers(cfg: &mut web::ServiceConfig) {
    general::setup_public_controllers(cfg);
    auth::setup_public_controllers(cfg);
    bootcamps::setup_public_controllers(cfg);
    courses::setup_public_controllers(cfg);
    reviews::setup_public_controllers(cfg);
}

pub fn setup_protected_controllers(cfg: &mut web::ServiceConfig) {
    auth::setup_protected_controllers(cfg);
    bootcamps::setup_protected_controllers(cfg);
    courses::setup_protected_controllers(cfg);
    reviews::setup_protected_controllers(cfg);
    users::setup_protected_controllers(cfg);
}

pub fn setup_docs() -> utoipa::openapi::OpenApi {
    let mut openapi = utoipa::openapi::OpenApi::default();
    openapi.merge(general::setup_docs());
    openapi.merge(auth::setup_docs());
    openapi.merge(bootcamps::setup_docs());
    openapi.merge(courses::setup_docs());
    openapi.merge(reviews::setup_docs());
    openapi.merge(users::setup_docs());
    openapi
}
