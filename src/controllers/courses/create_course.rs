use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME},
    database::schemas::course::{
        course_to_dto, Course, CourseDto, MinimumSkill, COURSE_COLLECTION_NAME,
    },
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(create_course), components(schemas(CreateCourseRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequestDto {
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{bootcampId}/courses",
    tag = "Courses",
    summary = "Add a course to a bootcamp",
    description = "Bootcamp owner or admin only; refreshes the average cost",
    security(
        ("Bearer" = [])
    ),
    params(
        ("bootcampId" = String, Path, description = "Parent bootcamp id")
    ),
    request_body = CreateCourseRequestDto,
    responses(
        (status = 201, body = DataResponse<CourseDto>)
    )
)]
#[post("/bootcamps/{bootcampId}/courses")]
pub async fn create_course(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<CreateCourseRequestDto>,
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
    if payload.title.trim().is_empty() || payload.description.trim().is_empty() {
        return ApiError::Validation("Please add a title and description".to_string())
            .to_response();
    }
    if payload.tuition < 0.0 {
        return ApiError::Validation("Tuition must not be negative".to_string()).to_response();
    }

    let bootcamp = match db
        .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
        .find_one(doc! { "_id": bootcamp_id })
        .await
    {
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
            "User {} is not authorized to add a course to bootcamp {}",
            identity.user_id, bootcamp_id
        ))
        .to_response();
    }

    let now = bson::DateTime::now();
    let course = Course {
        id: None,
        title: payload.title.clone(),
        description: payload.description.clone(),
        weeks: payload.weeks.clone(),
        tuition: payload.tuition,
        minimum_skill: payload.minimum_skill,
        scholarship_available: payload.scholarship_available.unwrap_or(false),
        bootcamp: bootcamp_id,
        user: identity.user_id,
        created_at: now,
        updated_at: now,
    };
    let result = match db
        .collection::<Course>(COURSE_COLLECTION_NAME)
        .insert_one(course.clone())
        .await
    {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("failed to create course: {}", err);
            return ApiError::Upstream("failed to create course".to_string()).to_response();
        }
    };

    providers::aggregates::recalculate_average_cost(&db, bootcamp_id).await;

    let mut created = course;
    created.id = result.inserted_id.as_object_id();
    HttpResponse::Created().json(DataResponse {
        success: true,
        data: course_to_dto(created),
    })
}
