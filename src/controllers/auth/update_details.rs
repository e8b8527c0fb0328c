use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::user::{user_to_dto, is_valid_email, User, UserDto, USER_COLLECTION_NAME},
    error_response::ApiError,
    identity::get_identity,
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(update_details), components(schemas(UpdateDetailsRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateDetailsRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v1/auth/updatedetails",
    tag = "Auth",
    summary = "Update details",
    description = "Update the name and email of the current account",
    security(
        ("Bearer" = [])
    ),
    request_body = UpdateDetailsRequestDto,
    responses(
        (status = 200, body = DataResponse<UserDto>)
    )
)]
#[put("/auth/updatedetails")]
pub async fn update_details(
    req: HttpRequest,
    payload: web::Json<UpdateDetailsRequestDto>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };

    let mut fields = doc! { "updatedAt": bson::DateTime::now() };
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return ApiError::Validation("Please add a name".to_string()).to_response();
        }
        fields.insert("name", name.clone());
    }
    if let Some(email) = &payload.email {
        if !is_valid_email(email) {
            return ApiError::Validation("Please add a valid email".to_string()).to_response();
        }
        fields.insert("email", email.clone());
    }

    let collection = db.collection::<User>(USER_COLLECTION_NAME);
    match collection
        .update_one(doc! { "_id": identity.user_id }, doc! { "$set": fields })
        .await
    {
        Ok(_) => {}
        Err(err) => {
            if providers::database::is_duplicate_key_error(&err) {
                return ApiError::Validation("Email already registered".to_string()).to_response();
            }
            tracing::error!("failed to update user: {}", err);
            return ApiError::Upstream("failed to update user".to_string()).to_response();
        }
    }

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

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: user_to_dto(user),
    })
}
