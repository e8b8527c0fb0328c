use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error, HttpMessage, HttpResponse,
};
use bson::doc;

use crate::providers::{
    self,
    database::schemas::user::{User, USER_COLLECTION_NAME},
    error_response::ErrorResponse,
    identity::Identity,
};

fn unauthorized(req: ServiceRequest, message: &str) -> Result<ServiceResponse<BoxBody>, Error> {
    Ok(req.into_response(HttpResponse::Unauthorized().json(ErrorResponse {
        success: false,
        error: message.to_string(),
    })))
}

/// Verifies the bearer credential, resolves the acting identity and stores
/// it as a request extension. Token comes from the Authorization header
/// first, then from the 'token' cookie.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let header_token = req
        .headers()
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.to_string());
    let token = match header_token {
        Some(token) => token,
        None => match req.cookie("token") {
            Some(cookie) => cookie.value().to_string(),
            None => return unauthorized(req, "Access denied"),
        },
    };

    let config = match req.app_data::<web::Data<providers::config::AppConfig>>() {
        Some(config) => config,
        None => return unauthorized(req, "No app config"),
    };

    let claims = match providers::jwt::verify_access_token(&token, &config.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("Error verifying token: {}", err);
            return unauthorized(req, "Access denied");
        }
    };

    let now = (bson::DateTime::now().timestamp_millis() / 1000) as usize;
    if claims.exp < now {
        return unauthorized(req, "Token expired");
    }

    let user_id = match bson::oid::ObjectId::parse_str(&claims.sub) {
        Ok(user_id) => user_id,
        Err(err) => {
            tracing::error!("Invalid user id with a valid token: {}", err);
            return unauthorized(req, "Access denied");
        }
    };

    // resolve the identity record behind the credential
    let db = match req.app_data::<web::Data<mongodb::Database>>() {
        Some(db) => db.clone(),
        None => return unauthorized(req, "No database handle"),
    };
    let user = match db
        .collection::<User>(USER_COLLECTION_NAME)
        .find_one(doc! { "_id": user_id })
        .await
    {
        Ok(user) => user,
        Err(err) => {
            tracing::error!("failed to resolve user {}: {}", user_id, err);
            return unauthorized(req, "Access denied");
        }
    };
    let user = match user {
        Some(user) => user,
        None => return unauthorized(req, "Access denied"),
    };

    req.extensions_mut().insert(Identity {
        user_id,
        role: user.role,
    });

    let resp = next.call(req).await?;
    Ok(resp.map_into_boxed_body())
}
