use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use futures_util::TryStreamExt;
use utoipa::OpenApi;

use crate::providers::{
    database::schemas::course::{course_to_dto, Course, CourseDto, COURSE_COLLECTION_NAME},
    error_response::ApiError,
    response::ListResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_bootcamp_courses), components(schemas(CourseDto)))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{bootcampId}/courses",
    tag = "Courses",
    summary = "Get the courses of a bootcamp",
    description = "All courses of one bootcamp, without pagination",
    params(
        ("bootcampId" = String, Path, description = "Parent bootcamp id")
    ),
    responses(
        (status = 200, body = ListResponse<CourseDto>)
    )
)]
#[get("/bootcamps/{bootcampId}/courses")]
pub async fn get_bootcamp_courses(
    path: web::Path<String>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let id = path.into_inner();
    let bootcamp_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(bootcamp_id) => bootcamp_id,
        Err(_) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
    };

    let cursor = match db
        .collection::<Course>(COURSE_COLLECTION_NAME)
        .find(doc! { "bootcamp": bootcamp_id })
        .await
    {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get courses: {}", err);
            return ApiError::Upstream("failed to get courses".to_string()).to_response();
        }
    };
    let courses = match cursor.try_collect::<Vec<Course>>().await {
        Ok(courses) => courses,
        Err(err) => {
            tracing::error!("failed to get courses: {}", err);
            return ApiError::Upstream("failed to get courses".to_string()).to_response();
        }
    };

    let data = courses.into_iter().map(course_to_dto).collect::<Vec<_>>();
    HttpResponse::Ok().json(ListResponse {
        success: true,
        count: data.len(),
        pagination: None,
        data,
    })
}
