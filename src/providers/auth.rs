use actix_web::cookie::{time::Duration, Cookie};
use actix_web::HttpResponse;
use rand::RngCore;
use sha2::{Digest, Sha256};

use super::config::AppConfig;
use super::jwt::{sign_access_token, AccessTokenClaims};
use super::response::TokenResponse;

const DEFAULT_TOKEN_EXPIRY_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Sign a token for the user and return it in the body and as an http-only
/// cookie, the way login, register and password reset all respond.
pub fn token_response(
    user_id: bson::oid::ObjectId,
    config: &AppConfig,
) -> Result<HttpResponse, anyhow::Error> {
    let expiry = config.jwt_expiry.unwrap_or(DEFAULT_TOKEN_EXPIRY_SECONDS);
    let token = sign_access_token(
        AccessTokenClaims {
            sub: user_id.to_hex(),
            exp: (bson::DateTime::now().timestamp_millis() / 1000) as usize + expiry as usize,
        },
        &config.jwt_secret,
    )?;

    let cookie = Cookie::build("token", token.clone())
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure.unwrap_or(false))
        .max_age(Duration::days(config.cookie_expire_days.unwrap_or(30)))
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(TokenResponse {
        success: true,
        token,
    }))
}

/// Generate a password reset token. The plain token goes into the reset
/// email, only its sha256 hex digest is persisted.
pub fn new_reset_token() -> (String, String) {
    let mut bytes = [0u8; 20];
    rand::rng().fill_bytes(&mut bytes);
    let token = hex_encode(&bytes);
    let hashed = hash_reset_token(&token);
    (token, hashed)
}

pub fn hash_reset_token(token: &str) -> String {
    hex_encode(&Sha256::digest(token.as_bytes()))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hash_the_persisted_half_of_the_reset_token() {
        let (token, hashed) = new_reset_token();
        assert_eq!(token.len(), 40);
        assert_eq!(hashed.len(), 64);
        assert_ne!(token, hashed);
        assert_eq!(hash_reset_token(&token), hashed);
    }

    #[test]
    fn should_generate_distinct_reset_tokens() {
        let (first, _) = new_reset_token();
        let (second, _) = new_reset_token();
        assert_ne!(first, second);
    }

    #[test]
    fn should_hash_deterministically() {
        assert_eq!(hash_reset_token("abc"), hash_reset_token("abc"));
        assert_ne!(hash_reset_token("abc"), hash_reset_token("abd"));
    }
}
