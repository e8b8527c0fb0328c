use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use futures_util::TryStreamExt;
use utoipa::OpenApi;

use crate::providers::{
    database::schemas::review::{review_to_dto, Review, ReviewDto, REVIEW_COLLECTION_NAME},
    error_response::ApiError,
    response::ListResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_bootcamp_reviews), components(schemas(ReviewDto)))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{bootcampId}/reviews",
    tag = "Reviews",
    summary = "Get the reviews of a bootcamp",
    description = "All reviews of one bootcamp, without pagination",
    params(
        ("bootcampId" = String, Path, description = "Parent bootcamp id")
    ),
    responses(
        (status = 200, body = ListResponse<ReviewDto>)
    )
)]
#[get("/bootcamps/{bootcampId}/reviews")]
pub async fn get_bootcamp_reviews(
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
        .collection::<Review>(REVIEW_COLLECTION_NAME)
        .find(doc! { "bootcamp": bootcamp_id })
        .await
    {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get reviews: {}", err);
            return ApiError::Upstream("failed to get reviews".to_string()).to_response();
        }
    };
    let reviews = match cursor.try_collect::<Vec<Review>>().await {
        Ok(reviews) => reviews,
        Err(err) => {
            tracing::error!("failed to get reviews: {}", err);
            return ApiError::Upstream("failed to get reviews".to_string()).to_response();
        }
    };

    let data = reviews.into_iter().map(review_to_dto).collect::<Vec<_>>();
    HttpResponse::Ok().json(ListResponse {
        success: true,
        count: data.len(),
        pagination: None,
        data,
    })
}
