use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::Pagination;

/// Envelope for single-resource reads and writes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

/// Envelope for listings. `count` is the number of records in this window,
/// `pagination` is present when the listing is paginated.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub data: Vec<T>,
}

/// Envelope returned whenever a new credential is issued.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}
