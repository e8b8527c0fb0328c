use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page window in a paginated listing.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

/// Links to the neighbouring page windows. A link is present only when the
/// window exists: `next` when more records follow, `prev` when the window
/// does not start at the first record.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageWindow>,
}

/// Compute the pagination metadata for a window of `limit` records starting
/// at `(page - 1) * limit` over `total` matching records.
pub fn paginate(total: u64, page: i64, limit: i64) -> Pagination {
    let start_index = (page - 1) * limit;
    let mut pagination = Pagination::default();
    if start_index + limit < total as i64 {
        pagination.next = Some(PageWindow {
            page: page + 1,
            limit,
        });
    }
    if start_index > 0 {
        pagination.prev = Some(PageWindow {
            page: page - 1,
            limit,
        });
    }
    pagination
}
