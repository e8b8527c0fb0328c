use std::fs;
use std::io::Write;

use actix_multipart::Multipart;
use actix_web::{put, web, HttpRequest, HttpResponse, Responder};
use bson::doc;
use futures_util::StreamExt;
use utoipa::{OpenApi, ToSchema};

use crate::providers::{
    self,
    database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME},
    error_response::ApiError,
    identity::{get_identity, owns_or_admin},
    response::DataResponse,
};

#[derive(OpenApi)]
#[openapi(paths(upload_photo))]
pub struct OpenApiSpec;

#[derive(serde::Serialize, ToSchema)]
struct PhotoUploadRequest {
    #[schema(value_type = String, format = "binary")]
    file: Vec<u8>,
}

#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}/photo",
    tag = "Bootcamps",
    summary = "Upload a bootcamp photo",
    description = "Owner or admin only; accepts a single image file",
    security(
        ("Bearer" = [])
    ),
    params(
        ("id" = String, Path, description = "Bootcamp id")
    ),
    request_body(
        content = PhotoUploadRequest,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 200, body = DataResponse<String>)
    )
)]
#[put("/bootcamps/{id}/photo")]
pub async fn upload_photo(
    req: HttpRequest,
    path: web::Path<String>,
    mut payload: Multipart,
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

    let max_size = config.max_file_upload();
    let mut file_bytes: Vec<u8> = Vec::new();
    let mut extension: Option<String> = None;
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(err) => {
                tracing::error!("failed to read multipart field: {}", err);
                return ApiError::Validation("Please upload a file".to_string()).to_response();
            }
        };

        let mime = match field.content_type() {
            Some(mime) => mime.clone(),
            None => {
                return ApiError::Validation("Please upload an image file".to_string())
                    .to_response();
            }
        };
        if mime.type_() != "image" {
            return ApiError::Validation("Please upload an image file".to_string()).to_response();
        }
        extension = Some(mime.subtype().as_str().to_string());

        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(err) => {
                    tracing::error!("failed to read chunk: {}", err);
                    return ApiError::Validation("Please upload a file".to_string()).to_response();
                }
            };
            if file_bytes.len() + chunk.len() > max_size {
                return ApiError::Validation(format!(
                    "Please upload an image less than {} bytes",
                    max_size
                ))
                .to_response();
            }
            file_bytes.extend_from_slice(&chunk);
        }
    }
    let extension = match extension {
        Some(extension) if !file_bytes.is_empty() => extension,
        _ => return ApiError::Validation("Please upload a file".to_string()).to_response(),
    };

    let file_name = format!("photo_{}.{}", bootcamp_id.to_hex(), extension);
    let file_path = format!("{}/{}", config.file_upload_path(), file_name);
    let mut file = match fs::File::create(&file_path) {
        Ok(file) => file,
        Err(err) => {
            tracing::error!("failed to create file {}: {}", file_path, err);
            return ApiError::Upstream("failed to store file".to_string()).to_response();
        }
    };
    if let Err(err) = file.write_all(&file_bytes) {
        tracing::error!("failed to write file {}: {}", file_path, err);
        return ApiError::Upstream("failed to store file".to_string()).to_response();
    }

    match collection
        .update_one(
            doc! { "_id": bootcamp_id },
            doc! { "$set": {
                "photo": file_name.clone(),
                "updatedAt": bson::DateTime::now(),
            }},
        )
        .await
    {
        Ok(_) => {}
        Err(err) => {
            tracing::error!("failed to update bootcamp: {}", err);
            return ApiError::Upstream("failed to update bootcamp".to_string()).to_response();
        }
    }

    HttpResponse::Ok().json(DataResponse {
        success: true,
        data: file_name,
    })
}
