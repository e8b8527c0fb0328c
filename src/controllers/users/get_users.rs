use std::collections::HashMap;

use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::user::{Role, HIDDEN_FIELDS, QUERY_FIELDS, USER_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, has_role},
    response::ListResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_users))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Get all users",
    description = "Admin only; list users with filtering, selection, sorting and pagination",
    security(
        ("Bearer" = [])
    ),
    params(
        ("select" = Option<String>, Query, description = "Comma separated list of fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, prefix with - for descending"),
        ("page" = Option<i64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, body = ListResponse<serde_json::Value>)
    )
)]
#[get("/users")]
pub async fn get_users(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
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

    let translated = match providers::query::translate(&query, QUERY_FIELDS) {
        Ok(translated) => translated,
        Err(err) => return ApiError::Validation(err.to_string()).to_response(),
    };

    let collection = db.collection::<bson::Document>(USER_COLLECTION_NAME);
    let total = match collection.count_documents(translated.filter.clone()).await {
        Ok(total) => total,
        Err(err) => {
            tracing::error!("failed to count users: {}", err);
            return ApiError::Upstream("failed to get users".to_string()).to_response();
        }
    };

    let mut pipeline = vec![
        doc! { "$match": translated.filter.clone() },
        doc! { "$sort": translated.sort.clone() },
        doc! { "$skip": translated.start_index() },
        doc! { "$limit": translated.limit },
    ];
    if let Some(projection) = translated.projection.clone() {
        pipeline.push(doc! { "$project": projection });
    }

    let cursor = match collection.aggregate(pipeline).await {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get users: {}", err);
            return ApiError::Upstream("failed to get users".to_string()).to_response();
        }
    };
    let users = match providers::database::cursor_to_vec::<bson::Document>(cursor).await {
        Ok(users) => users,
        Err(err) => {
            tracing::error!("failed to get users: {}", err);
            return ApiError::Upstream("failed to get users".to_string()).to_response();
        }
    };

    // credential material never leaves the api, whatever the projection says
    let data = users
        .into_iter()
        .map(|mut user| {
            for field in HIDDEN_FIELDS {
                user.remove(*field);
            }
            providers::database::document_to_json(&user)
        })
        .collect::<Vec<_>>();
    HttpResponse::Ok().json(ListResponse {
        success: true,
        count: data.len(),
        pagination: Some(providers::pagination::paginate(
            total,
            translated.page,
            translated.limit,
        )),
        data,
    })
}
