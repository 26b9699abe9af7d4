//! Open position model.

use mads_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `positions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Position {
    pub id: DbId,
    pub title: String,
    pub location_type: String,
    pub employment_type: String,
    pub caption: String,
    pub open: bool,
}
