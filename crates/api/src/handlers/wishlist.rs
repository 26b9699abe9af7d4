//! Handlers for the `/wishlist` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mads_core::types::DbId;
use mads_db::commerce;
use mads_db::models::wishlist::WishlistItem;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /wishlist`.
#[derive(Debug, Deserialize)]
pub struct AddToWishlistRequest {
    pub drone_id: DbId,
}

/// Request body for `POST /wishlist/{id}/move-to-cart`.
#[derive(Debug, Default, Deserialize)]
pub struct MoveToCartRequest {
    /// Defaults to 1.
    pub quantity: Option<i32>,
}

/// GET /api/v1/wishlist
pub async fn list_wishlist(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WishlistItem>>>> {
    let data = commerce::get_wishlist_items(&state.pool, Some(&auth.session())).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/wishlist
///
/// Wishlist a drone. A drone already on the list is a 409, and no
/// duplicate row is created.
pub async fn add_to_wishlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddToWishlistRequest>,
) -> AppResult<StatusCode> {
    commerce::add_to_wishlist(&state.pool, Some(&auth.session()), input.drone_id).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/wishlist/{id}
pub async fn remove_from_wishlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(wishlist_item_id): Path<DbId>,
) -> AppResult<StatusCode> {
    commerce::remove_from_wishlist(&state.pool, Some(&auth.session()), wishlist_item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/wishlist/{id}/move-to-cart
///
/// Move a wishlist item into the cart transactionally.
pub async fn move_to_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(wishlist_item_id): Path<DbId>,
    Json(input): Json<MoveToCartRequest>,
) -> AppResult<StatusCode> {
    let quantity = input.quantity.unwrap_or(1);
    commerce::move_wishlist_to_cart(
        &state.pool,
        Some(&auth.session()),
        wishlist_item_id,
        quantity,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/wishlist/contains/{drone_id}
pub async fn contains(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(drone_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let in_wishlist =
        commerce::is_drone_in_wishlist(&state.pool, Some(&auth.session()), drone_id).await?;
    Ok(Json(json!({ "data": { "in_wishlist": in_wishlist } })))
}
