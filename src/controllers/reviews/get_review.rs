use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::review::REVIEW_COLLECTION_NAME,
    error_response::ApiError,
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_review))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = "Reviews",
    summary = "Get a single review",
    description = "One review with a summary of its parent bootcamp embedded",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, body = DataResponse<serde_json::Value>)
    )
)]
#[get("/reviews/{id}")]
pub async fn get_review(
    path: web::Path<String>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let id = path.into_inner();
    let review_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(review_id) => review_id,
        Err(_) => {
            return ApiError::NotFound(format!("Review not found with id of {}", id)).to_response();
        }
    };

    let cursor = match db
        .collection::<bson::Document>(REVIEW_COLLECTION_NAME)
        .aggregate(vec![
            doc! { "$match": { "_id": review_id } },
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
            tracing::error!("failed to get review: {}", err);
            return ApiError::Upstream("failed to get review".to_string()).to_response();
        }
    };
    let reviews = match providers::database::cursor_to_vec::<bson::Document>(cursor).await {
        Ok(reviews) => reviews,
        Err(err) => {
            tracing::error!("failed to get review: {}", err);
            return ApiError::Upstream("failed to get review".to_string()).to_response();
        }
    };
    let review = match reviews.first() {
        Some(review) => review,
        None => {
            return ApiError::NotFound(format!("Review not found with id of {}", id)).to_response();
        }
    };

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: providers::database::document_to_json(review),
    })
}
