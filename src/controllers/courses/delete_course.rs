use actix_web::{delete, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::course::{Course, COURSE_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(delete_course))]
pub struct OpenApiSpec;

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    summary = "Delete a course",
    description = "Owner or admin only; refreshes the average cost",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, body = DataResponse<serde_json::Value>)
    )
)]
#[delete("/courses/{id}")]
pub async fn delete_course(
    req: HttpRequest,
    path: web::Path<String>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    let id = path.into_inner();
    let course_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(course_id) => course_id,
        Err(_) => {
            return ApiError::NotFound(format!("Course not found with id of {}", id)).to_response();
        }
    };

    let collection = db.collection::<Course>(COURSE_COLLECTION_NAME);
    let course = match collection.find_one(doc! { "_id": course_id }).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return ApiError::NotFound(format!("Course not found with id of {}", id)).to_response();
        }
        Err(err) => {
            tracing::error!("failed to get course: {}", err);
            return ApiError::Upstream("failed to get course".to_string()).to_response();
        }
    };
    if !owns_or_admin(&identity, &course.user) {
        return ApiError::Forbidden(format!(
            "User {} is not authorized to delete course {}",
            identity.user_id, course_id
        ))
        .to_response();
    }

    match collection.delete_one(doc! { "_id": course_id }).await {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to delete course: {}", err);
            return ApiError::Upstream("failed to delete course".to_string()).to_response();
        }
    }

    providers::aggregates::recalculate_average_cost(&db, course.bootcamp).await;

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: serde_json::json!({}),
    })
}
