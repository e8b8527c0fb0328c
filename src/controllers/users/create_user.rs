use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
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
#[openapi(paths(create_user), components(schemas(CreateUserRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequestDto {
    pub name: String,
    #[schema(example = "john.smith@example.com")]
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Create a user",
    description = "Admin only; may create accounts of any role",
    security(
        ("Bearer" = [])
    ),
    request_body = CreateUserRequestDto,
    responses(
        (status = 201, body = DataResponse<UserDto>)
    )
)]
#[post("/users")]
pub async fn create_user(
    req: HttpRequest,
    payload: web::Json<CreateUserRequestDto>,
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

    let password_hash = match bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!("failed to hash password: {}", err);
            return ApiError::Upstream("failed to hash password".to_string()).to_response();
        }
    };

    let now = bson::DateTime::now();
    let user = User {
        id: None,
        name: payload.name.clone(),
        email: payload.email.clone(),
        role: payload.role.unwrap_or(Role::User),
        password: password_hash,
        reset_password_token: None,
        reset_password_expire: None,
        created_at: now,
        updated_at: now,
    };
    let result = match db
        .collection::<User>(USER_COLLECTION_NAME)
        .insert_one(user.clone())
        .await
    {
        Ok(result) => result,
        Err(err) => {
            if providers::database::is_duplicate_key_error(&err) {
                return ApiError::Validation("Email already registered".to_string()).to_response();
            }
            tracing::error!("failed to create user: {}", err);
            return ApiError::Upstream("failed to create user".to_string()).to_response();
        }
    };

    let mut created = user;
    created.id = result.inserted_id.as_object_id();
    HttpResponse::Created().json(DataResponse {
        success: true,
        data: user_to_dto(created),
    })
}
