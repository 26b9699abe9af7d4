//! Per-user cart and wishlist operations.
//!
//! Every operation takes the session explicitly — there is no ambient
//! current-user lookup. An absent session is a typed failure
//! ([`CommerceError::NotAuthenticated`]), never treated as an empty cart.
//!
//! The add paths are single conditional writes (upsert against the
//! `uq_cart_items_user_drone` / `uq_wishlist_items_user_drone` constraints)
//! and the wishlist-to-cart move runs in one transaction, so concurrent
//! calls from the same account cannot duplicate rows or half-apply a move.

use mads_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart::CartItem;
use crate::models::wishlist::WishlistItem;
use crate::repositories::{CartRepo, WishlistRepo};

/// An authenticated caller. Constructed by the HTTP layer from a verified
/// bearer token and passed down; the database layer never inspects tokens.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub user_id: DbId,
}

#[derive(Debug, thiserror::Error)]
pub enum CommerceError {
    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Item already in wishlist")]
    AlreadyInWishlist,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

fn require(session: Option<&Session>) -> Result<&Session, CommerceError> {
    session.ok_or(CommerceError::NotAuthenticated)
}

/// Add `quantity` of a drone to the cart, creating the row or bumping an
/// existing row's quantity in one write.
///
/// No upper bound is enforced here; callers cap against the drone's
/// available stock if they want one.
pub async fn add_to_cart(
    pool: &PgPool,
    session: Option<&Session>,
    drone_id: DbId,
    quantity: i32,
) -> Result<(), CommerceError> {
    let session = require(session)?;
    let quantity = quantity.max(1);
    CartRepo::upsert_add(pool, session.user_id, drone_id, quantity).await?;
    tracing::debug!(user_id = session.user_id, drone_id, quantity, "added to cart");
    Ok(())
}

/// Delete a cart row owned by the session user.
pub async fn remove_from_cart(
    pool: &PgPool,
    session: Option<&Session>,
    cart_item_id: DbId,
) -> Result<(), CommerceError> {
    let session = require(session)?;
    if CartRepo::delete(pool, cart_item_id, session.user_id).await? {
        Ok(())
    } else {
        Err(CommerceError::NotFound("Cart item"))
    }
}

/// Set a cart row's quantity. A quantity of zero or less removes the row —
/// a stored quantity below 1 never exists.
pub async fn update_cart_quantity(
    pool: &PgPool,
    session: Option<&Session>,
    cart_item_id: DbId,
    quantity: i32,
) -> Result<(), CommerceError> {
    if quantity <= 0 {
        return remove_from_cart(pool, session, cart_item_id).await;
    }
    let session = require(session)?;
    if CartRepo::set_quantity(pool, cart_item_id, session.user_id, quantity).await? {
        Ok(())
    } else {
        Err(CommerceError::NotFound("Cart item"))
    }
}

/// The session user's cart, newest first, drone snapshot included.
pub async fn get_cart_items(
    pool: &PgPool,
    session: Option<&Session>,
) -> Result<Vec<CartItem>, CommerceError> {
    let session = require(session)?;
    Ok(CartRepo::list_for_user(pool, session.user_id).await?)
}

/// Add a drone to the wishlist. Fails with [`CommerceError::AlreadyInWishlist`]
/// when the drone is wishlisted already; the unique constraint guarantees no
/// duplicate row is created either way.
pub async fn add_to_wishlist(
    pool: &PgPool,
    session: Option<&Session>,
    drone_id: DbId,
) -> Result<(), CommerceError> {
    let session = require(session)?;
    if WishlistRepo::insert_if_absent(pool, session.user_id, drone_id).await? {
        tracing::debug!(user_id = session.user_id, drone_id, "added to wishlist");
        Ok(())
    } else {
        Err(CommerceError::AlreadyInWishlist)
    }
}

/// Delete a wishlist row owned by the session user.
pub async fn remove_from_wishlist(
    pool: &PgPool,
    session: Option<&Session>,
    wishlist_item_id: DbId,
) -> Result<(), CommerceError> {
    let session = require(session)?;
    if WishlistRepo::delete(pool, wishlist_item_id, session.user_id).await? {
        Ok(())
    } else {
        Err(CommerceError::NotFound("Wishlist item"))
    }
}

/// The session user's wishlist, newest first, drone snapshot included.
pub async fn get_wishlist_items(
    pool: &PgPool,
    session: Option<&Session>,
) -> Result<Vec<WishlistItem>, CommerceError> {
    let session = require(session)?;
    Ok(WishlistRepo::list_for_user(pool, session.user_id).await?)
}

/// Move a wishlist item into the cart in a single transaction: read and
/// lock the wishlist row, upsert the cart row, delete the wishlist row.
/// Either everything applies or nothing does.
pub async fn move_wishlist_to_cart(
    pool: &PgPool,
    session: Option<&Session>,
    wishlist_item_id: DbId,
    quantity: i32,
) -> Result<(), CommerceError> {
    let session = require(session)?;
    let quantity = quantity.max(1);

    let mut tx = pool.begin().await?;

    let drone_id: Option<DbId> = sqlx::query_scalar(
        "SELECT drone_id FROM wishlist_items WHERE id = $1 AND user_id = $2 FOR UPDATE",
    )
    .bind(wishlist_item_id)
    .bind(session.user_id)
    .fetch_optional(&mut *tx)
    .await?;

    // Dropping the transaction without committing rolls it back.
    let Some(drone_id) = drone_id else {
        return Err(CommerceError::NotFound("Wishlist item"));
    };

    sqlx::query(
        "INSERT INTO cart_items (user_id, drone_id, quantity) \
         VALUES ($1, $2, $3) \
         ON CONFLICT ON CONSTRAINT uq_cart_items_user_drone \
         DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity, \
                       updated_at = NOW()",
    )
    .bind(session.user_id)
    .bind(drone_id)
    .bind(quantity)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM wishlist_items WHERE id = $1")
        .bind(wishlist_item_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::debug!(
        user_id = session.user_id,
        wishlist_item_id,
        drone_id,
        "moved wishlist item to cart"
    );
    Ok(())
}

/// Whether the session user has a cart row for this drone.
pub async fn is_drone_in_cart(
    pool: &PgPool,
    session: Option<&Session>,
    drone_id: DbId,
) -> Result<bool, CommerceError> {
    let session = require(session)?;
    Ok(CartRepo::exists_for_drone(pool, session.user_id, drone_id).await?)
}

/// Whether the session user has a wishlist row for this drone.
pub async fn is_drone_in_wishlist(
    pool: &PgPool,
    session: Option<&Session>,
    drone_id: DbId,
) -> Result<bool, CommerceError> {
    let session = require(session)?;
    Ok(WishlistRepo::exists_for_drone(pool, session.user_id, drone_id).await?)
}
