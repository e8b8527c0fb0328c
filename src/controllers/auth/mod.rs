use actix_web::web;
use utoipa::OpenApi;

mod forgot_password;
mod login;
mod me;
mod register;
mod reset_password;
mod update_details;
mod update_password;

#[cfg(test)]
mod tests;

pub fn setup_public_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(register::register);
    cfg.service(login::login);
    cfg.service(forgot_password::forgot_password);
    cfg.service(reset_password::reset_password);
}

pub fn setup_protected_controllers(cfg: &mut web::ServiceConfig) {
    cfg.service(me::me);
    cfg.service(update_details::update_details);
    cfg.service(update_password::update_password);
}

pub fn setup_docs() -> utoipa::openapi::OpenApi {
    let mut openapi = utoipa::openapi::OpenApi::default();
    openapi.merge(register::OpenApiSpec::openapi());
    openapi.merge(login::OpenApiSpec::openapi());
    openapi.merge(me::OpenApiSpec::openapi());
    openapi.merge(update_details::OpenApiSpec::openapi());
    openapi.merge(update_password::OpenApiSpec::openapi());
    openapi.merge(forgot_password::OpenApiSpec::openapi());
    openapi.merge(reset_password::OpenApiSpec::openapi());
    openapi
}
