//! Drone catalog models.

use mads_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `droneslist` table.
///
/// The spec-sheet fields (`range`, `flight_time`, `max_speed`, `payload`)
/// are display strings rendered verbatim, not quantities.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Drone {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub price: f64,
    pub range: String,
    pub flight_time: String,
    pub max_speed: String,
    pub payload: String,
    pub in_stock: bool,
    pub show: bool,
    pub produced: bool,
    pub quantity: i32,
    /// Price on request instead of a listed price.
    pub quote: bool,
}
