use actix_web::{post, web, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::user::{User, USER_COLLECTION_NAME},
    error_response::ApiError,
    response::TokenResponse,
};

#[derive(OpenApi)]
#[openapi(paths(login), components(schemas(LoginRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "john.smith@example.com")]
    pub email: String,
    #[schema(example = "123456")]
    pub password: String,
}

// the same message for a missing user and a wrong password, so a response
// never reveals which one it was
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    summary = "Login",
    description = "Use email and password to receive a signed token",
    request_body = LoginRequestDto,
    responses(
        (status = 200, body = TokenResponse)
    )
)]
#[post("/auth/login")]
pub async fn login(
    payload: web::Json<LoginRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return ApiError::Validation("Please provide an email and password".to_string())
            .to_response();
    }

    let user = match db
        .collection::<User>(USER_COLLECTION_NAME)
        .find_one(doc! { "email": payload.email.clone() })
        .await
    {
        Ok(user) => user,
        Err(err) => {
            tracing::error!("failed to get user: {}", err);
            return ApiError::Upstream("failed to get user".to_string()).to_response();
        }
    };
    let user = match user {
        Some(user) => user,
        None => return ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()).to_response(),
    };

    match bcrypt::verify(&payload.password, &user.password) {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            return ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()).to_response();
        }
    }

    let user_id = match user.id {
        Some(user_id) => user_id,
        None => return ApiError::Upstream("invalid user".to_string()).to_response(),
    };
    match providers::auth::token_response(user_id, &config) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to sign token: {}", err);
            ApiError::Upstream("failed to sign token".to_string()).to_response()
        }
    }
}
