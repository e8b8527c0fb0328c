use actix_web::{delete, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::review::{Review, REVIEW_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(delete_review))]
pub struct OpenApiSpec;

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    summary = "Delete a review",
    description = "Owner or admin only; refreshes the average rating",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, body = DataResponse<serde_json::Value>)
    )
)]
#[delete("/reviews/{id}")]
pub async fn delete_review(
    req: HttpRequest,
    path: web::Path<String>,
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
            "User {} is not authorized to delete review {}",
            identity.user_id, review_id
        ))
        .to_response();
    }

    match collection.delete_one(doc! { "_id": review_id }).await {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to delete review: {}", err);
            return ApiError::Upstream("failed to delete review".to_string()).to_response();
        }
    }

    providers::aggregates::recalculate_average_rating(&db, review.bootcamp).await;

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: serde_json::json!({}),
    })
}
