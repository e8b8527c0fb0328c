use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    database::schemas::user::{user_to_dto, User, UserDto, USER_COLLECTION_NAME},
    error_response::ApiError,
    identity::get_identity,
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(me), components(schemas(UserDto)))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Auth",
    summary = "Current user",
    description = "Get the account behind the presented credential",
    security(
        ("Bearer" = [])
    ),
    responses(
        (status = 200, body = DataResponse<UserDto>)
    )
)]
#[get("/auth/me")]
pub async fn me(req: HttpRequest, db: web::Data<mongodb::Database>) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };

    let user = match db
        .collection::<User>(USER_COLLECTION_NAME)
        .find_one(doc! { "_id": identity.user_id })
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
            return ApiError::NotFound(format!("User not found with id {}", identity.user_id))
                .to_response();
        }
    };

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: user_to_dto(user),
    })
}
