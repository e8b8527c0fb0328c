use actix_web::{get, web, HttpResponse, Responder};
use bson::doc;
use futures_util::TryStreamExt;
use utoipa::OpenApi;

use crate::providers::{
    self,
    database::schemas::bootcamp::{
        bootcamp_to_dto, Bootcamp, BootcampDto, BOOTCAMP_COLLECTION_NAME,
    },
    error_response::ApiError,
    geocoder::EARTH_RADIUS_KM,
    response::ListResponse,
};

#[derive(OpenApi)]
#[openapi(paths(get_bootcamps_in_radius))]
pub struct OpenApiSpec;

#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/radius/{zipcode}/{distance}",
    tag = "Bootcamps",
    summary = "Get bootcamps within a radius",
    description = "Find bootcamps within a distance in kilometres of a zipcode",
    params(
        ("zipcode" = String, Path, description = "Center zipcode"),
        ("distance" = f64, Path, description = "Radius in kilometres")
    ),
    responses(
        (status = 200, body = ListResponse<BootcampDto>)
    )
)]
#[get("/bootcamps/radius/{zipcode}/{distance}")]
pub async fn get_bootcamps_in_radius(
    path: web::Path<(String, f64)>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let (zipcode, distance) = path.into_inner();
    if distance <= 0.0 {
        return ApiError::Validation("Distance must be greater than 0".to_string()).to_response();
    }

    let center = match providers::geocoder::geocode(&config, &zipcode).await {
        Ok(center) => center,
        Err(err) => {
            tracing::error!("failed to geocode zipcode: {}", err);
            return ApiError::Upstream("failed to geocode zipcode".to_string()).to_response();
        }
    };

    // $centerSphere takes the radius in radians
    let radius = distance / EARTH_RADIUS_KM;
    let filter = doc! {
        "location": {
            "$geoWithin": {
                "$centerSphere": [[center.longitude, center.latitude], radius]
            }
        }
    };

    let cursor = match db
        .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
        .find(filter)
        .await
    {
        Ok(cursor) => cursor,
        Err(err) => {
            tracing::error!("failed to get bootcamps: {}", err);
            return ApiError::Upstream("failed to get bootcamps".to_string()).to_response();
        }
    };
    let bootcamps = match cursor.try_collect::<Vec<Bootcamp>>().await {
        Ok(bootcamps) => bootcamps,
        Err(err) => {
            tracing::error!("failed to get bootcamps: {}", err);
            return ApiError::Upstream("failed to get bootcamps".to_string()).to_response();
        }
    };

    let data = bootcamps.into_iter().map(bootcamp_to_dto).collect::<Vec<_>>();
    HttpResponse::Ok().json(ListResponse {
        success: true,
        count: data.len(),
        pagination: None,
        data,
    })
}
