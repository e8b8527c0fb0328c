use std::collections::HashMap;

use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::review::{QUERY_FIELDS, REVIEW_COLLECTION_NAME},
    error_response::ApiError,
    response::ListResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_reviews))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "Reviews",
    summary = "Get all reviews",
    description = "List reviews with filtering, selection, sorting and pagination",
    params(
        ("select" = Option<String>, Query, description = "Comma separated list of fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, prefix with - for descending"),
        ("page" = Option<i64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<i64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, body = ListResponse<serde_json::Value>)
    )
)]
#[get("/reviews")]
pub async fn get_reviews(
    query: web::Query<HashMap<String, String>>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let translated = match providers::query::translate(&query, QUERY_FIELDS) {
        Ok(translated) => translated,
        Err(err) => return ApiError::Validation(err.to_string()).to_response(),
    };

    let collection = db.collection::<bson::Document>(REVIEW_COLLECTION_NAME);
    let total = match collection.count_documents(translated.filter.clone()).await {
        Ok(total) => total,
        Err(err) => {
            tracing::error!("failed to count reviews: {}", err);
            return ApiError::Upstream("failed to get reviews".to_string()).to_response();
        }
    };

    let mut pipeline = vec![
        doc! { "$match": translated.filter.clone() },
        doc! { "$sort": translated.sort.clone() },
        doc! { "$skip": translated.start_index() },
        doc! { "$limit": translated.limit },
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
    ];
    if let Some(mut projection) = translated.projection.clone() {
        projection.insert("bootcamp", 1);
        pipeline.push(doc! { "$project": projection });
    }

    let cursor = match collection.aggregate(pipeline).await {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get reviews: {}", err);
            return ApiError::Upstream("failed to get reviews".to_string()).to_response();
        }
    };
    let reviews = match providers::database::cursor_to_vec::<bson::Document>(cursor).await {
        Ok(reviews) => reviews,
        Err(err) => {
            tracing::error!("failed to get reviews: {}", err);
            return ApiError::Upstream("failed to get reviews".to_string()).to_response();
        }
    };

    let data = reviews
        .iter()
        .map(providers::database::document_to_json)
        .collect::<Vec<_>>();
    HttpResponse::Ok().json(ListResponse {
        success: true,
        count: data.len(),
        pagination: Some(providers::pagination::paginate(
            total,
            translated.page,
            translated.limit,
        )),
        data,
    })
}
