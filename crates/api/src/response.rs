//! Shared response envelope types for API handlers.
//!
//! Reads use the `{ "data": ... }` envelope (paginated reads add `"count"`);
//! form submissions use `{ "success": true, "message": ... }`. Errors are
//! produced by [`crate::error::AppError`] and always carry `"success": false`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for reads.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "count": N }` envelope for paginated reads, where
/// `count` is the total matching-row count, not the page length.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: i64,
}

/// `{ "success": true, "message": ... }` envelope for form submissions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
