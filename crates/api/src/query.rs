//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// One-based page parameters for paginated listings (`?page=&page_size=`).
///
/// Page 2 with a page size of 5 reads rows 5..=9 of the ordered result.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Query parameters for list endpoints that cap their result (`?limit=`).
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
