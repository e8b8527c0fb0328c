use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::user::{
        is_valid_email, user_to_dto, Role, User, UserDto, USER_COLLECTION_NAME,
    },
    error_response::ApiError,
    identity::{get_identity, has_role},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(update_user), components(schemas(UpdateUserRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Update a user",
    description = "Admin only",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UpdateUserRequestDto,
    responses(
        (status = 200, body = DataResponse<UserDto>)
    )
)]
#[put("/users/{id}")]
pub async fn update_user(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequestDto>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    if !has_role(&identity, &[Role::Admin]) {
        return ApiError::Forbidden(format!(
            "User role {} is not authorized to access this route",
            identity.role
        ))
        .to_response();
    }
    let id = path.into_inner();
    let user_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(user_id) => user_id,
        Err(_) => {
            return ApiError::NotFound(format!("User not found with id {}", id)).to_response();
        }
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
    if let Some(role) = payload.role {
        fields.insert("role", role.to_string());
    }

    let collection = db.collection::<User>(USER_COLLECTION_NAME);
    match collection
        .update_one(doc! { "_id": user_id }, doc! { "$set": fields })
        .await
    {
        Ok(result) => {
            if result.matched_count == 0 {
                return ApiError::NotFound(format!("User not found with id {}", id)).to_response();
            }
        }
        Err(err) => {
            if providers::database::is_duplicate_key_error(&err) {
                return ApiError::Validation("Email already registered".to_string()).to_response();
            }
            tracing::error!("failed to update user: {}", err);
            return ApiError::Upstream("failed to update user".to_string()).to_response();
        }
    }

    let user = match collection.find_one(doc! { "_id": user_id }).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return ApiError::NotFound(format!("User not found with id {}", id)).to_response();
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
