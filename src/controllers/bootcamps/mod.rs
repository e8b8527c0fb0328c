use actix_web::web;
use utoipa::OpenApi;

mod create_bootcamp;
mod delete_bootcamp;
mod get_bootcamp;
mod get_bootcamps;
mod get_bootcamps_in_radius;
mod update_bootcamp;
mod upload_photo;

#[cfg(test)]
mod tests;

pub fn setup_public_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(get_bootcamps::get_bootcamps);
    cfg.service(get_bootcamps_in_radius::get_bootcamps_in_radius);
    cfg.service(get_bootcamp::get_bootcamp);
}

pub fn setup_protected_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(create_bootcamp::create_bootcamp);
    cfg.service(update_bootcamp::update_bootcamp);
    cfg.service(delete_bootcamp::delete_bootcamp);
    cfg.service(upload_photo::upload_photo);
}

pub fn setup_docs() -> utoipa::openapi::OpenApi {
    let mut openapi = utoipa::openapi::OpenApi::default();
    openapi.merge(get_bootcamps::OpenApiSpec::openapi());
    openapi.merge(get_bootcamp::OpenApiSpec::openapi());
    openapi.merge(get_bootcamps_in_radius::OpenApiSpec::openapi());
    openapi.merge(create_bootcamp::OpenApiSpec::openapi());
    openapi.merge(update_bootcamp::OpenApiSpec::openapi());
    openapi.merge(delete_bootcamp::OpenApiSpec::openapi());
    openapi.merge(upload_photo::OpenApiSpec::openapi());
    openapi
}
