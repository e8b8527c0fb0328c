use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    database::schemas::user::{user_to_dto, Role, User, UserDto, USER_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, has_role},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_user))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Get a single user",
    description = "Admin only",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, body = DataResponse<UserDto>)
    )
)]
#[get("/users/{id}")]
pub async fn get_user(
    req: HttpRequest,
    path: web::Path<String>,
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

    let user = match db
        .collection::<User>(USER_COLLECTION_NAME)
        .find_one(doc! { "_id": user_id })
        .await
    {
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
