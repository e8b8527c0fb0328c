use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME},
    database::schemas::review::{review_to_dto, Review, ReviewDto, REVIEW_COLLECTION_NAME},
    database::schemas::user::Role,
    error_response::ApiError,
    identity::{get_identity, has_role},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(create_review), components(schemas(CreateReviewRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateReviewRequestDto {
    pub title: String,
    pub text: String,
    /// 1 to 10
    pub rating: i32,
}

#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{bootcampId}/reviews",
    tag = "Reviews",
    summary = "Add a review to a bootcamp",
    description = "One review per user and bootcamp; refreshes the average rating",
    security(
        ("Bearer" = [])
    ),
    params(
        ("bootcampId" = String, Path, description = "Parent bootcamp id")
    ),
    request_body = CreateReviewRequestDto,
    responses(
        (status = 201, body = DataResponse<ReviewDto>)
    )
)]
#[post("/bootcamps/{bootcampId}/reviews")]
pub async fn create_review(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<CreateReviewRequestDto>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    if !has_role(&identity, &[Role::User, Role::Admin]) {
        return ApiError::Forbidden(format!(
            "User role {} is not authorized to access this route",
            identity.role
        ))
        .to_response();
    }
    let id = path.into_inner();
    let bootcamp_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(bootcamp_id) => bootcamp_id,
        Err(_) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
    };
    if payload.title.trim().is_empty() || payload.text.trim().is_empty() {
        return ApiError::Validation("Please add a title and text".to_string()).to_response();
    }
    if !(1..=10).contains(&payload.rating) {
        return ApiError::Validation("Rating must be between 1 and 10".to_string()).to_response();
    }

    match db
        .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
        .find_one(doc! { "_id": bootcamp_id })
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
        Err(err) => {
            tracing::error!("failed to get bootcamp: {}", err);
            return ApiError::Upstream("failed to get bootcamp".to_string()).to_response();
        }
    }

    let now = bson::DateTime::now();
    let review = Review {
        id: None,
        title: payload.title.clone(),
        text: payload.text.clone(),
        rating: payload.rating,
        bootcamp: bootcamp_id,
        user: identity.user_id,
        created_at: now,
        updated_at: now,
    };
    let result = match db
        .collection::<Review>(REVIEW_COLLECTION_NAME)
        .insert_one(review.clone())
        .await
    {
        Ok(result) => result,
        Err(err) => {
            if providers::database::is_duplicate_key_error(&err) {
                return ApiError::Validation(
                    "You have already reviewed this bootcamp".to_string(),
                )
                .to_response();
            }
            tracing::error!("failed to create review: {}", err);
            return ApiError::Upstream("failed to create review".to_string()).to_response();
        }
    };

    providers::aggregates::recalculate_average_rating(&db, bootcamp_id).await;

    let mut created = review;
    created.id = result.inserted_id.as_object_id();
    HttpResponse::Created().json(DataResponse {
        success: true,
        data: review_to_dto(created),
    })
}
