use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::course::{
        course_to_dto, Course, CourseDto, MinimumSkill, COURSE_COLLECTION_NAME,
    },
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(update_course), components(schemas(UpdateCourseRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequestDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<String>,
    pub tuition: Option<f64>,
    pub minimum_skill: Option<MinimumSkill>,
    pub scholarship_available: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    summary = "Update a course",
    description = "Owner or admin only; refreshes the average cost",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Course id")
    ),
    request_body = UpdateCourseRequestDto,
    responses(
        (status = 200, body = DataResponse<CourseDto>)
    )
)]
#[put("/courses/{id}")]
pub async fn update_course(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateCourseRequestDto>,
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
    if let Some(tuition) = payload.tuition {
        if tuition < 0.0 {
            return ApiError::Validation("Tuition must not be negative".to_string()).to_response();
        }
    }

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
            "User {} is not authorized to update course {}",
            identity.user_id, course_id
        ))
        .to_response();
    }

    let mut fields = doc! { "updatedAt": bson::DateTime::now() };
    if let Some(title) = &payload.title {
        fields.insert("title", title.clone());
    }
    if let Some(description) = &payload.description {
        fields.insert("description", description.clone());
    }
    if let Some(weeks) = &payload.weeks {
        fields.insert("weeks", weeks.clone());
    }
    if let Some(tuition) = payload.tuition {
        fields.insert("tuition", tuition);
    }
    if let Some(minimum_skill) = payload.minimum_skill {
        fields.insert("minimumSkill", minimum_skill.to_string());
    }
    if let Some(scholarship_available) = payload.scholarship_available {
        fields.insert("scholarshipAvailable", scholarship_available);
    }

    match collection
        .update_one(doc! { "_id": course_id }, doc! { "$set": fields })
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to update course: {}", err);
            return ApiError::Upstream("failed to update course".to_string()).to_response();
        }
    }

    providers::aggregates::recalculate_average_cost(&db, course.bootcamp).await;

    let updated = match collection.find_one(doc! { "_id": course_id }).await {
        Ok(Some(updated)) => updated,
        Ok(None) => {
            return ApiError::NotFound(format!("Course not found with id of {}", id)).to_response();
        }
        Err(err) => {
            tracing::error!("failed to get course: {}", err);
            return ApiError::Upstream("failed to get course".to_string()).to_response();
        }
    };
    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: course_to_dto(updated),
    })
}
