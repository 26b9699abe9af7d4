//! Repository for the `wishlist_items` table.

use mads_core::types::DbId;
use sqlx::PgPool;

use crate::models::wishlist::WishlistItem;

/// Column list for wishlist reads, with the drone snapshot joined in.
const COLUMNS: &str = "wi.id, wi.user_id, wi.drone_id, wi.created_at, \
     d.name AS drone_name, d.image_url AS drone_image_url, \
     d.price AS drone_price, d.in_stock AS drone_in_stock";

/// Provides CRUD operations for wishlist items.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Insert a wishlist row unless one already exists for this
    /// (user, drone). Returns `true` when a row was actually inserted;
    /// `false` means the drone was already wishlisted.
    pub async fn insert_if_absent(
        pool: &PgPool,
        user_id: DbId,
        drone_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO wishlist_items (user_id, drone_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_wishlist_items_user_drone DO NOTHING",
        )
        .bind(user_id)
        .bind(drone_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a wishlist row owned by `user_id`. Returns `true` if it existed.
    pub async fn delete(
        pool: &PgPool,
        wishlist_item_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE id = $1 AND user_id = $2")
            .bind(wishlist_item_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's wishlist, newest first, with the drone snapshot joined.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WishlistItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlist_items wi \
             JOIN droneslist d ON d.id = wi.drone_id \
             WHERE wi.user_id = $1 \
             ORDER BY wi.created_at DESC"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether the user already has a wishlist row for this drone.
    pub async fn exists_for_drone(
        pool: &PgPool,
        user_id: DbId,
        drone_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM wishlist_items WHERE user_id = $1 AND drone_id = $2)",
        )
        .bind(user_id)
        .bind(drone_id)
        .fetch_one(pool)
        .await
    }
}
