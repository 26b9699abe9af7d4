//! Cart item model.

use mads_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A `cart_items` row with the owning drone's snapshot joined in.
///
/// The `drone_*` fields come from `droneslist` at read time; they are not
/// stored on the cart row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartItem {
    pub id: DbId,
    pub user_id: DbId,
    pub drone_id: DbId,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub drone_name: String,
    pub drone_image_url: String,
    pub drone_price: f64,
    pub drone_in_stock: bool,
}
