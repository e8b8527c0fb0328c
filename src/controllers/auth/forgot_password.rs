use actix_web::{post, web, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::user::{User, USER_COLLECTION_NAME},
    error_response::ApiError,
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(forgot_password), components(schemas(ForgotPasswordRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordRequestDto {
    #[schema(example = "john.smith@example.com")]
    pub email: String,
}

const RESET_TOKEN_WINDOW_MINUTES: i64 = 10;

#[utoipa::path(
    post,
    path = "/api/v1/auth/forgotpassword",
    tag = "Auth",
    summary = "Forgot password",
    description = "Email a password reset link valid for ten minutes",
    request_body = ForgotPasswordRequestDto,
    responses(
        (status = 200, body = DataResponse<String>)
    )
)]
#[post("/auth/forgotpassword")]
pub async fn forgot_password(
    payload: web::Json<ForgotPasswordRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let collection = db.collection::<User>(USER_COLLECTION_NAME);
    let user = match collection
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
        None => {
            return ApiError::NotFound(format!("There is no user with email {}", payload.email))
                .to_response();
        }
    };
    let user_id = match user.id {
        Some(user_id) => user_id,
        None => return ApiError::Upstream("invalid user".to_string()).to_response(),
    };

    let (reset_token, hashed_token) = providers::auth::new_reset_token();
    let expire = bson::DateTime::from_millis(
        bson::DateTime::now().timestamp_millis() + RESET_TOKEN_WINDOW_MINUTES * 60 * 1000,
    );
    match collection
        .update_one(
            doc! { "_id": user_id },
            doc! { "$set": {
                "resetPasswordToken": hashed_token,
                "resetPasswordExpire": expire,
                "updatedAt": bson::DateTime::now(),
            }},
        )
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to store reset token: {}", err);
            return ApiError::Upstream("failed to store reset token".to_string()).to_response();
        }
    }

    let reset_url = format!("{}/api/v1/auth/resetpassword/{}", config.host, reset_token);
    let message = format!("Click here to reset your password: {}", reset_url);
    if let Err(err) =
        providers::mailer::send_email(&config, &user.email, "Password Reset Token", &message).await
    {
        tracing::error!("failed to send reset email: {}", err);
        // the emailed token never left the building, remove the persisted half
        if let Err(rollback_err) = collection
            .update_one(
                doc! { "_id": user_id },
                doc! { "$unset": {
                    "resetPasswordToken": "",
                    "resetPasswordExpire": "",
                }},
            )
            .await
        {
            tracing::error!("failed to roll back reset token: {}", rollback_err);
        }
        return ApiError::Upstream("Email sending failed".to_string()).to_response();
    }

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: "Email sent".to_string(),
    })
}
