use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::review::{review_to_dto, Review, ReviewDto, REVIEW_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(update_review), components(schemas(UpdateReviewRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewRequestDto {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    summary = "Update a review",
    description = "Owner or admin only; refreshes the average rating",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Review id")
    ),
    request_body = UpdateReviewRequestDto,
    responses(
        (status = 200, body = DataResponse<ReviewDto>)
    )
)]
#[put("/reviews/{id}")]
pub async fn update_review(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateReviewRequestDto>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    let id = path.into_inner();
    let review_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(review_id) => review_id,
        Err(_) => {
            return ApiError::NotFound(format!("Review not found with id of {}", id)).to_response();
        }
    };
    if let Some(rating) = payload.rating {
        if !(1..=10).contains(&rating) {
            return ApiError::Validation("Rating must be between 1 and 10".to_string())
                .to_response();
        }
    }

    let collection = db.collection::<Review>(REVIEW_COLLECTION_NAME);
    let review = match collection.find_one(doc! { "_id": review_id }).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return ApiError::NotFound(format!("Review not found with id of {}", id)).to_response();
        }
        Err(err) => {
            tracing::error!("failed to get review: {}", err);
            return ApiError::Upstream("failed to get review".to_string()).to_response();
        }
    };
    if !owns_or_admin(&identity, &review.user) {
        return ApiError::Forbidden(format!(
            "User {} is not authorized to update review {}",
            identity.user_id, review_id
        ))
        .to_response();
    }

    let mut fields = doc! { "updatedAt": bson::DateTime::now() };
    if let Some(title) = &payload.title {
        fields.insert("title", title.clone());
    }
    if let Some(text) = &payload.text {
        fields.insert("text", text.clone());
    }
    if let Some(rating) = payload.rating {
        fields.insert("rating", rating);
    }

    match collection
        .update_one(doc! { "_id": review_id }, doc! { "$set": fields })
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to update review: {}", err);
            return ApiError::Upstream("failed to update review".to_string()).to_response();
        }
    }

    providers::aggregates::recalculate_average_rating(&db, review.bootcamp).await;

    let updated = match collection.find_one(doc! { "_id": review_id }).await {
        Ok(Some(updated)) => updated,
        Ok(None) => {
            return ApiError::NotFound(format!("Review not found with id of {}", id)).to_response();
        }
        Err(err) => {
            tracing::error!("failed to get review: {}", err);
            return ApiError::Upstream("failed to get review".to_string()).to_response();
        }
    };
    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: review_to_dto(updated),
    })
}
