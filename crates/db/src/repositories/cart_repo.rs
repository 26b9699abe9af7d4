//! Repository for the `cart_items` table.

use mads_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart::CartItem;

/// Column list for cart reads, with the drone snapshot joined in.
const COLUMNS: &str = "ci.id, ci.user_id, ci.drone_id, ci.quantity, ci.created_at, ci.updated_at, \
     d.name AS drone_name, d.image_url AS drone_image_url, \
     d.price AS drone_price, d.in_stock AS drone_in_stock";

/// Provides CRUD operations for cart items.
pub struct CartRepo;

impl CartRepo {
    /// Add `quantity` of a drone to a user's cart as a single conditional
    /// write: inserts a new row, or bumps the existing row's quantity when
    /// one already exists for this (user, drone). Returns the row id.
    pub async fn upsert_add(
        pool: &PgPool,
        user_id: DbId,
        drone_id: DbId,
        quantity: i32,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO cart_items (user_id, drone_id, quantity) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_cart_items_user_drone \
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity, \
                           updated_at = NOW() \
             RETURNING id",
        )
        .bind(user_id)
        .bind(drone_id)
        .bind(quantity)
        .fetch_one(pool)
        .await
    }

    /// Set the stored quantity of a cart row owned by `user_id`.
    ///
    /// Returns `true` if the row was found and updated. Callers must not
    /// pass a quantity below 1; the schema rejects it.
    pub async fn set_quantity(
        pool: &PgPool,
        cart_item_id: DbId,
        user_id: DbId,
        quantity: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cart_items \
             SET quantity = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(cart_item_id)
        .bind(user_id)
        .bind(quantity)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a cart row owned by `user_id`. Returns `true` if it existed.
    pub async fn delete(
        pool: &PgPool,
        cart_item_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
            .bind(cart_item_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's cart, newest first, with the drone snapshot joined.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<CartItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cart_items ci \
             JOIN droneslist d ON d.id = ci.drone_id \
             WHERE ci.user_id = $1 \
             ORDER BY ci.created_at DESC"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether the user already has a cart row for this drone.
    pub async fn exists_for_drone(
        pool: &PgPool,
        user_id: DbId,
        drone_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM cart_items WHERE user_id = $1 AND drone_id = $2)",
        )
        .bind(user_id)
        .bind(drone_id)
        .fetch_one(pool)
        .await
    }
}
