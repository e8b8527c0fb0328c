use actix_web::{post, web, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::user::{is_valid_email, Role, User, USER_COLLECTION_NAME},
    error_response::ApiError,
    response::TokenResponse,
};

#[derive(OpenApi)]
#[openapi(paths(register), components(schemas(RegisterRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    pub name: String,
    #[schema(example = "john.smith@example.com")]
    pub email: String,
    pub password: String,
    /// 'user' or 'publisher'; defaults to 'user'
    pub role: Option<Role>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    summary = "Register a new user",
    description = "Register an account and receive a signed token",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, body = TokenResponse)
    )
)]
#[post("/auth/register")]
pub async fn register(
    payload: web::Json<RegisterRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    if payload.name.trim().is_empty() {
        return ApiError::Validation("Please add a name".to_string()).to_response();
    }
    if !is_valid_email(&payload.email) {
        return ApiError::Validation("Please add a valid email".to_string()).to_response();
    }
    if payload.password.len() < 6 {
        return ApiError::Validation("Password must be at least 6 characters".to_string())
            .to_response();
    }
    let role = payload.role.unwrap_or(Role::User);
    if role == Role::Admin {
        return ApiError::Validation("Cannot register as admin".to_string()).to_response();
    }

    let password_hash = match bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!("failed to hash password: {}", err);
            return ApiError::Upstream("failed to hash password".to_string()).to_response();
        }
    };

    let now = bson::DateTime::now();
    let result = db
        .collection::<User>(USER_COLLECTION_NAME)
        .insert_one(User {
            id: None,
            name: payload.name.clone(),
            email: payload.email.clone(),
            role,
            password: password_hash,
            reset_password_token: None,
            reset_password_expire: None,
            created_at: now,
            updated_at: now,
        })
        .await;
    let user_id = match result {
        Ok(result) => match result.inserted_id.as_object_id() {
            Some(user_id) => user_id,
            None => {
                return ApiError::Upstream("failed to create user".to_string()).to_response();
            }
        },
        Err(err) => {
            if providers::database::is_duplicate_key_error(&err) {
                return ApiError::Validation("Email already registered".to_string()).to_response();
            }
            tracing::error!("failed to create user: {}", err);
            return ApiError::Upstream("failed to create user".to_string()).to_response();
        }
    };

    match providers::auth::token_response(user_id, &config) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to sign token: {}", err);
            ApiError::Upstream("failed to sign token".to_string()).to_response()
        }
    }
}
