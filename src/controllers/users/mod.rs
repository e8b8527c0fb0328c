use actix_web::web;
use utoipa::OpenApi;

mod create_user;
mod delete_user;
mod get_user;
mod get_users;
mod update_user;

#[cfg(test)]
mod tests;

pub fn setup_protected_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(get_users::get_users);
    cfg.service(get_user::get_user);
    cfg.service(create_user::create_user);
    cfg.service(update_user::update_user);
    cfg.service(delete_user::delete_user);
}

pub fn setup_docs() -> utoipa::openapi::OpenApi {
    let mut openapi = utoipa::openapi::OpenApi::default();
    openapi.merge(get_users::OpenApiSpec::openapi());
    openapi.merge(get_user::OpenApiSpec::openapi());
    openapi.merge(create_user::OpenApiSpec::openapi());
    openapi.merge(update_user::OpenApiSpec::openapi());
    openapi.merge(delete_user::OpenApiSpec::openapi());
    openapi
}
