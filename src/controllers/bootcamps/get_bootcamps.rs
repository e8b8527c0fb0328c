use std::collections::HashMap;

use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::bootcamp::{BOOTCAMP_COLLECTION_NAME, QUERY_FIELDS},
    error_response::ApiError,
    response::ListResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_bootcamps))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/bootcamps",
    tag = "Bootcamps",
    summary = "Get all bootcamps",
    description = "List bootcamps with filtering, selection, sorting and pagination",
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
#[get("/bootcamps")]
pub async fn get_bootcamps(
    query: web::Query<HashMap<String, String>>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let translated = match providers::query::translate(&query, QUERY_FIELDS) {
        Ok(translated) => translated,
        Err(err) => return ApiError::Validation(err.to_string()).to_response(),
    };

    let collection = db.collection::<bson::Document>(BOOTCAMP_COLLECTION_NAME);
    let total = match collection.count_documents(translated.filter.clone()).await {
        Ok(total) => total,
        Err(err) => {
            tracing::error!("failed to count bootcamps: {}", err);
            return ApiError::Upstream("failed to get bootcamps".to_string()).to_response();
        }
    };

    let mut pipeline = vec![
        doc! { "$match": translated.filter.clone() },
        doc! { "$sort": translated.sort.clone() },
        doc! { "$skip": translated.start_index() },
        doc! { "$limit": translated.limit },
        // reverse populate the course titles of each bootcamp
        doc! { "$lookup": {
            "from": "courses",
            "localField": "_id",
            "foreignField": "bootcamp",
            "as": "courses",
            "pipeline": [ { "$project": { "title": 1 } } ],
        }},
    ];
    if let Some(mut projection) = translated.projection.clone() {
        projection.insert("courses", 1);
        pipeline.push(doc! { "$project": projection });
    }

    let cursor = match collection.aggregate(pipeline).await {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get bootcamps: {}", err);
            return ApiError::Upstream("failed to get bootcamps".to_string()).to_response();
        }
    };
    let bootcamps = match providers::database::cursor_to_vec::<bson::Document>(cursor).await {
        Ok(bootcamps) => bootcamps,
        Err(err) => {
            tracing::error!("failed to get bootcamps: {}", err);
            return ApiError::Upstream("failed to get bootcamps".to_string()).to_response();
        }
    };

    let data = bootcamps
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
