//! Customer review models and DTOs.

use mads_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub body: String,
    pub rating: i32,
    pub email: String,
    pub submitted_at: Timestamp,
}

/// DTO for submitting a new review.
#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub title: String,
    pub body: String,
    /// 1 to 5.
    pub rating: i32,
    pub email: String,
}
