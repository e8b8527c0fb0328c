use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::bootcamp::{
        bootcamp_to_dto, Bootcamp, BootcampDto, BOOTCAMP_COLLECTION_NAME,
    },
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(update_bootcamp), components(schemas(UpdateBootcampRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootcampRequestDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<String>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}",
    tag = "Bootcamps",
    summary = "Update a bootcamp",
    description = "Owner or admin only; a changed address is geocoded again",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Bootcamp id")
    ),
    request_body = UpdateBootcampRequestDto,
    responses(
        (status = 200, body = DataResponse<BootcampDto>)
    )
)]
#[put("/bootcamps/{id}")]
pub async fn update_bootcamp(
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<UpdateBootcampRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    let id = path.into_inner();
    let bootcamp_id = match bson::oid::ObjectId::parse_str(&id) {
        Ok(bootcamp_id) => bootcamp_id,
        Err(_) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
    };

    let collection = db.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME);
    let bootcamp = match collection.find_one(doc! { "_id": bootcamp_id }).await {
        Ok(Some(bootcamp)) => bootcamp,
        Ok(None) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
        Err(err) => {
            tracing::error!("failed to get bootcamp: {}", err);
            return ApiError::Upstream("failed to get bootcamp".to_string()).to_response();
        }
    };
    if !owns_or_admin(&identity, &bootcamp.user) {
        return ApiError::Forbidden(format!(
            "User {} is not authorized to update this bootcamp",
            identity.user_id
        ))
        .to_response();
    }

    let mut fields = doc! { "updatedAt": bson::DateTime::now() };
    if let Some(name) = &payload.name {
        fields.insert("name", name.clone());
    }
    if let Some(description) = &payload.description {
        fields.insert("description", description.clone());
    }
    if let Some(website) = &payload.website {
        fields.insert("website", website.clone());
    }
    if let Some(phone) = &payload.phone {
        fields.insert("phone", phone.clone());
    }
    if let Some(careers) = &payload.careers {
        fields.insert("careers", careers.clone());
    }
    if let Some(housing) = payload.housing {
        fields.insert("housing", housing);
    }
    if let Some(job_assistance) = payload.job_assistance {
        fields.insert("jobAssistance", job_assistance);
    }
    if let Some(job_guarantee) = payload.job_guarantee {
        fields.insert("jobGuarantee", job_guarantee);
    }
    if let Some(address) = &payload.address {
        if address != &bootcamp.address {
            let location = match providers::geocoder::geocode(&config, address).await {
                Ok(location) => location,
                Err(err) => {
                    tracing::error!("failed to geocode address: {}", err);
                    return ApiError::Upstream("failed to geocode address".to_string())
                        .to_response();
                }
            };
            let point = doc! {
                "type": "Point",
                "coordinates": [location.longitude, location.latitude],
            };
            let point = match location.formatted_address {
                Some(formatted_address) => {
                    let mut point = point;
                    point.insert("formattedAddress", formatted_address);
                    point
                }
                None => point,
            };
            fields.insert("address", address.clone());
            fields.insert("location", point);
        }
    }

    match collection
        .update_one(doc! { "_id": bootcamp_id }, doc! { "$set": fields })
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to update bootcamp: {}", err);
            return ApiError::Upstream("failed to update bootcamp".to_string()).to_response();
        }
    }

    let updated = match collection.find_one(doc! { "_id": bootcamp_id }).await {
        Ok(Some(updated)) => updated,
        Ok(None) => {
            return ApiError::NotFound(format!("Bootcamp not found with id of {}", id))
                .to_response();
        }
        Err(err) => {
            tracing::error!("failed to get bootcamp: {}", err);
            return ApiError::Upstream("failed to get bootcamp".to_string()).to_response();
        }
    };
    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: bootcamp_to_dto(updated),
    })
}
