use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::bootcamp::{
        bootcamp_to_dto, Bootcamp, BootcampDto, GeoPoint, BOOTCAMP_COLLECTION_NAME,
    },
    database::schemas::user::Role,
    error_response::ApiError,
    identity::{get_identity, has_role},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(create_bootcamp), components(schemas(CreateBootcampRequestDto)))]
pub struct OpenApiSpec;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootcampRequestDto {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub careers: Vec<String>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bootcamps",
    tag = "Bootcamps",
    summary = "Create a bootcamp",
    description = "Publishers may create one bootcamp, admins any number",
    security(
        ("Bearer" = [])
    ),
    request_body = CreateBootcampRequestDto,
    responses(
        (status = 201, body = DataResponse<BootcampDto>)
    )
)]
#[post("/bootcamps")]
pub async fn create_bootcamp(
    req: HttpRequest,
    payload: web::Json<CreateBootcampRequestDto>,
    config: web::Data<providers::config::AppConfig>,
    db: web::Data<mongodb::Database>,
) -> impl Responder {
    let identity = match get_identity(&req) {
        Some(identity) => identity,
        None => return ApiError::Unauthorized("Access denied".to_string()).to_response(),
    };
    if !has_role(&identity, &[Role::Publisher, Role::Admin]) {
        return ApiError::Forbidden(format!(
            "User role {} is not authorized to access this route",
            identity.role
        ))
        .to_response();
    }
    if payload.name.trim().is_empty()
        || payload.description.trim().is_empty()
        || payload.address.trim().is_empty()
    {
        return ApiError::Validation(
            "Please add a name, description and address".to_string(),
        )
        .to_response();
    }

    let collection = db.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME);

    // publishers may only own a single bootcamp
    if identity.role != Role::Admin {
        let existing = match collection.find_one(doc! { "user": identity.user_id }).await {
            Ok(existing) => existing,
            Err(err) => {
                tracing::error!("failed to get bootcamp: {}", err);
                return ApiError::Upstream("failed to get bootcamp".to_string()).to_response();
            }
        };
        if existing.is_some() {
            return ApiError::Forbidden(format!(
                "The user with ID {} has already published a bootcamp",
                identity.user_id
            ))
            .to_response();
        }
    }

    let location = match providers::geocoder::geocode(&config, &payload.address).await {
        Ok(location) => Some(GeoPoint {
            point_type: "Point".to_string(),
            coordinates: [location.longitude, location.latitude],
            formatted_address: location.formatted_address,
        }),
        Err(err) => {
            tracing::error!("failed to geocode address: {}", err);
            return ApiError::Upstream("failed to geocode address".to_string()).to_response();
        }
    };

    let now = bson::DateTime::now();
    let bootcamp = Bootcamp {
        id: None,
        name: payload.name.clone(),
        description: payload.description.clone(),
        website: payload.website.clone(),
        phone: payload.phone.clone(),
        address: payload.address.clone(),
        location,
        careers: payload.careers.clone(),
        housing: payload.housing.unwrap_or(false),
        job_assistance: payload.job_assistance.unwrap_or(false),
        job_guarantee: payload.job_guarantee.unwrap_or(false),
        photo: None,
        average_cost: None,
        average_rating: None,
        user: identity.user_id,
        created_at: now,
        updated_at: now,
    };
    let result = match collection.insert_one(bootcamp.clone()).await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("failed to create bootcamp: {}", err);
            return ApiError::Upstream("failed to create bootcamp".to_string()).to_response();
        }
    };

    let mut created = bootcamp;
    created.id = result.inserted_id.as_object_id();
    HttpResponse::Created().json(DataResponse {
        success: true,
        data: bootcamp_to_dto(created),
    })
}
