use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use utoipa::OpenApi;

use crate::providers::{
    database::schemas::bootcamp::{
        bootcamp_to_dto, Bootcamp, BootcampDto, BOOTCAMP_COLLECTION_NAME,
    },
    error_response::ApiError,
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_bootcamp), components(schemas(BootcampDto)))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}",
    tag = "Bootcamps",
    summary = "Get a single bootcamp",
    params(
        ("id" = String, Path, description = "Bootcamp id")
    ),
    responses(
        (status = 200, body = DataResponse<BootcampDto>)
    )
)]
#[get("/bootcamps/{id}")]
pub async fn get_bootcamp(
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

    let bootcamp = match db
        .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
        .find_one(doc! { "_id": bootcamp_id })
        .await
    {
        Ok(bootcamp) => bootcamp,
        Err(err) => {
            tracing::error!("failed to get bootcamp: {}", err);
            return ApiError::Upstream("failed to get bootcamp".to_string()).to_response();
        }
    };
    let bootcamp = match bootcamp {
        Some(bootcamp) => bootcamp,
        None => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
    };

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: bootcamp_to_dto(bootcamp),
    })
}
