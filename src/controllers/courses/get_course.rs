use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::course::COURSE_COLLECTION_NAME,
    error_response::ApiError,
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_course))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    summary = "Get a single course",
    description = "One course with a summary of its parent bootcamp embedded",
    params(
        ("id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, body = DataResponse<serde_json::Value>)
    )
)]
#[get("/courses/{id}")]
pub async fn get_course(
    path: web::Path<String>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let id = path.into_inner();
    let course_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(course_id) => course_id,
        Err(_) => {
            return ApiError::NotFound(format!("Course not found with id of {}", id)).to_response();
        }
    };

    let cursor = match db
        .collection::<bson::Document>(COURSE_COLLECTION_NAME)
        .aggregate(vec![
            doc! { "$match": { "_id": course_id } },
            doc! { "$lookup": {
                "from": "bootcamps",
                "localField": "bootcamp",
                "foreignField": "_id",
                "as": "bootcamp",
                "pipeline": [ { "$project": { "name": 1, "description": 1 } } ],
            }},
            doc! { "$unwind": {
                "path": "$bootcamp",
                "preserveNullAndEmptyArrays": true,
            }},
        ])
        .await
    {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get course: {}", err);
            return ApiError::Upstream("failed to get course".to_string()).to_response();
        }
    };
    let courses = match providers::database::cursor_to_vec::<bson::Document>(cursor).await {
        Ok(courses) => courses,
        Err(err) => {
            tracing::error!("failed to get course: {}", err);
            return ApiError::Upstream("failed to get course".to_string()).to_response();
        }
    };
    let course = match courses.first() {
        Some(course) => course,
        None => {
            return ApiError::NotFound(format!("Course not found with id of {}", id)).to_response();
        }
    };

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: providers::database::document_to_json(course),
    })
}
