use actix_web::{put, web, Responder};
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
#[openapi(paths(reset_password), components(schemas(ResetPasswordRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordRequestDto {
    #[schema(example = "123456")]
    pub password: String,
}

#[utoipa::path(
    put,
    path = "/api/v1/auth/resetpassword/{resettoken}",
    tag = "Auth",
    summary = "Reset password",
    description = "Redeem an emailed reset token for a new password",
    params(
        ("resettoken" = String, Path, description = "Reset token from the email link")
    ),
    request_body = ResetPasswordRequestDto,
    responses(
        (status = 200, body = TokenResponse)
    )
)]
#[put("/auth/resetpassword/{resettoken}")]
pub async fn reset_password(
    path: web::Path<String>,
    payload: web::Json<ResetPasswordRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    if payload.password.len() < 6 {
        return ApiError::Validation("Password must be at least 6 characters".to_string())
            .to_response();
    }

    // only the hash is stored, so hash the presented token before matching
    let hashed_token = providers::auth::hash_reset_token(&path.into_inner());
    let collection = db.collection::<User>(USER_COLLECTION_NAME);
    let user = match collection
        .find_one(doc! {
            "resetPasswordToken": hashed_token,
            "resetPasswordExpire": { "$gt": bson::DateTime::now() },
        })
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
        None => return ApiError::Validation("Invalid token".to_string()).to_response(),
    };
    let user_id = match user.id {
        Some(user_id) => user_id,
        None => return ApiError::Upstream("invalid user".to_string()).to_response(),
    };

    let password_hash = match bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!("failed to hash password: {}", err);
            return ApiError::Upstream("failed to hash password".to_string()).to_response();
        }
    };
    match collection
        .update_one(
            doc! { "_id": user_id },
            doc! {
                "$set": {
                    "password": password_hash,
                    "updatedAt": bson::DateTime::now(),
                },
                "$unset": {
                    "resetPasswordToken": "",
                    "resetPasswordExpire": "",
                },
            },
        )
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to update password: {}", err);
            return ApiError::Upstream("failed to update password".to_string()).to_response();
        }
    }

    match providers::auth::token_response(user_id, &config) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to sign token: {}", err);
            ApiError::Upstream("failed to sign token".to_string()).to_response()
        }
    }
}
