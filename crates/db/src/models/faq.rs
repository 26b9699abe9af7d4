//! FAQ entry model.

use mads_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `faq` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqItem {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub is_active: bool,
    /// Display position on the FAQ page, ascending.
    pub order: i32,
}
