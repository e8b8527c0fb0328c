use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessTokenClaims {
    /// user id
    pub sub: String,
    /// unix timestamp in seconds
    pub exp: usize,
}
