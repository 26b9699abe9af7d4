//! Wishlist item model.

use mads_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A `wishlist_items` row with the owning drone's snapshot joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WishlistItem {
    pub id: DbId,
    pub user_id: DbId,
    pub drone_id: DbId,
    pub created_at: Timestamp,
    pub drone_name: String,
    pub drone_image_url: String,
    pub drone_price: f64,
    pub drone_in_stock: bool,
}
