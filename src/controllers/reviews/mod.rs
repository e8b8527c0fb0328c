use actix_web::web;
use utoipa::OpenApi;

mod create_review;
mod delete_review;
mod get_bootcamp_reviews;
mod get_review;
mod get_reviews;
mod update_review;

#[cfg(test)]
mod tests;

pub fn setup_public_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(get_reviews::get_reviews);
    cfg.service(get_bootcamp_reviews::get_bootcamp_reviews);
    cfg.service(get_review::get_review);
}

pub fn setup_protected_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(create_review::create_review);
    cfg.service(update_review::update_review);
    cfg.service(delete_review::delete_review);
}

pub fn setup_docs() -> utoipa::openapi::OpenApi {
    let mut openapi = utoipa::openapi::OpenApi::default();
    openapi.merge(get_reviews::OpenApiSpec::openapi());
    openapi.merge(get_bootcamp_reviews::OpenApiSpec::openapi());
    openapi.merge(get_review::OpenApiSpec::openapi());
    openapi.merge(create_review::OpenApiSpec::openapi());
    openapi.merge(update_review::OpenApiSpec::openapi());
    openapi.merge(delete_review::OpenApiSpec::openapi());
    openapi
}
