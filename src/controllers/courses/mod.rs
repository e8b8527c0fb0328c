use actix_web::web;
use utoipa::OpenApi;

mod create_course;
mod delete_course;
mod get_bootcamp_courses;
mod get_course;
mod get_courses;
mod update_course;

#[cfg(test)]
mod tests;

pub fn setup_public_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(get_courses::get_courses);
    cfg.service(get_bootcamp_courses::get_bootcamp_courses);
    cfg.service(get_course::get_course);
}

pub fn setup_protected_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(create_course::create_course);
    cfg.service(update_course::update_course);
    cfg.service(delete_course::delete_course);
}

pub fn setup_docs() -> utoipa::openapi::OpenApi {
    let mut openapi = utoipa::openapi::OpenApi::default();
    openapi.merge(get_courses::OpenApiSpec::openapi());
    openapi.merge(get_bootcamp_courses::OpenApiSpec::openapi());
    openapi.merge(get_course::OpenApiSpec::openapi());
    openapi.merge(create_course::OpenApiSpec::openapi());
    openapi.merge(update_course::OpenApiSpec::openapi());
    openapi.merge(delete_course::OpenApiSpec::openapi());
    openapi
}
