use actix_web::{put, web, HttpRequest, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::user::{User, USER_COLLECTION_NAME},
    error_response::ApiError,
    identity::get_identity,
    response::TokenResponse,
};

#[derive(OpenApi)]
#[openapi(paths(update_password), components(schemas(UpdatePasswordRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequestDto {
    pub current_password: String,
    pub new_password: String,
}

#[utoipa::path(
    put,
    path = "/api/v1/auth/updatepassword",
    tag = "Auth",
    summary = "Update password",
    description = "Verify the current password and set a new one",
    security(
        ("Bearer" = [])
    ),
    request_body = UpdatePasswordRequestDto,
    responses(
        (status = 200, body = TokenResponse)
    )
)]
#[put("/auth/updatepassword")]
pub async fn update_password(
    req: HttpRequest,
    payload: web::Json<UpdatePasswordRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    if payload.new_password.len() < 6 {
        return ApiError::Validation("Password must be at least 6 characters".to_string())
            .to_response();
    }

    let collection = db.collection::<User>(USER_COLLECTION_NAME);
    let user = match collection.find_one(doc! { "_id": identity.user_id }).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return ApiError::NotFound(format!("User not found with id {}", identity.user_id))
                .to_response();
        }
        Err(err) => {
            tracing::error!("failed to get user: {}", err);
            return ApiError::Upstream("failed to get user".to_string()).to_response();
        }
    };

    match bcrypt::verify(&payload.current_password, &user.password) {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            return ApiError::Unauthorized("Current password is incorrect".to_string())
                .to_response();
        }
    }

    let password_hash = match bcrypt::hash(&payload.new_password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!("failed to hash password: {}", err);
            return ApiError::Upstream("failed to hash password".to_string()).to_response();
        }
    };
    match collection
        .update_one(
            doc! { "_id": identity.user_id },
            doc! { "$set": {
                "password": password_hash,
                "updatedAt": bson::DateTime::now(),
            }},
        )
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to update password: {}", err);
            return ApiError::Upstream("failed to update password".to_string()).to_response();
        }
    }

    match providers::auth::token_response(identity.user_id, &config) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to sign token: {}", err);
            ApiError::Upstream("failed to sign token".to_string()).to_response()
        }
    }
}
