use actix_web::{delete, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(delete_bootcamp))]
pub struct OpenApiSpec;

#[utoipa::path(
    delete,
    path = "/api/v1/bootcamps/{id}",
    tag = "Bootcamps",
    summary = "Delete a bootcamp",
    description = "Owner or admin only",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Bootcamp id")
    ),
    responses(
        (status = 200, body = DataResponse<serde_json::Value>)
    )
)]
#[delete("/bootcamps/{id}")]
pub async fn delete_bootcamp(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    let id = path.into_inner();
    let bootcamp_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(bootcamp_id) => bootcamp_id,
        Err(_) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
    };

    let collection = db.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME);
    let bootcamp = match collection.find_one(doc! { "_id": bootcamp_id }).await {
        Ok(Some(bootcamp)) => bootcamp,
        Ok(None) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
        Err(err) => {
            tracing::error!("failed to get bootcamp: {}", err);
            return ApiError::Upstream("failed to get bootcamp".to_string()).to_response();
        }
    };
    if !owns_or_admin(&identity, &bootcamp.user) {
        return ApiError::Forbidden(format!(
            "User {} is not authorized to delete this bootcamp",
            identity.user_id
        ))
        .to_response();
    }

    match collection.delete_one(doc! { "_id": bootcamp_id }).await {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to delete bootcamp: {}", err);
            return ApiError::Upstream("failed to delete bootcamp".to_string()).to_response();
        }
    }

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: serde_json::json!({}),
    })
}
