//! Handlers for the `/cart` resource.
//!
//! All endpoints require authentication via [`AuthUser`]; the session is
//! passed explicitly into the commerce layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mads_core::types::DbId;
use mads_db::commerce;
use mads_db::models::cart::CartItem;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /cart`.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub drone_id: DbId,
    /// Defaults to 1.
    pub quantity: Option<i32>,
}

/// Request body for `PUT /cart/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// GET /api/v1/cart
///
/// The caller's cart, newest first, drone snapshot included.
pub async fn list_cart(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CartItem>>>> {
    let data = commerce::get_cart_items(&state.pool, Some(&auth.session())).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/cart
///
/// Add a drone to the cart; adding an already-carted drone accumulates
/// its quantity on the existing row.
pub async fn add_to_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddToCartRequest>,
) -> AppResult<StatusCode> {
    let quantity = input.quantity.unwrap_or(1);
    commerce::add_to_cart(&state.pool, Some(&auth.session()), input.drone_id, quantity).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /api/v1/cart/{id}
///
/// Set a cart row's quantity; zero or less removes the row.
pub async fn update_quantity(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(cart_item_id): Path<DbId>,
    Json(input): Json<UpdateQuantityRequest>,
) -> AppResult<StatusCode> {
    commerce::update_cart_quantity(
        &state.pool,
        Some(&auth.session()),
        cart_item_id,
        input.quantity,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/cart/{id}
pub async fn remove_from_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(cart_item_id): Path<DbId>,
) -> AppResult<StatusCode> {
    commerce::remove_from_cart(&state.pool, Some(&auth.session()), cart_item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/cart/contains/{drone_id}
pub async fn contains(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(drone_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let in_cart = commerce::is_drone_in_cart(&state.pool, Some(&auth.session()), drone_id).await?;
    Ok(Json(json!({ "data": { "in_cart": in_cart } })))
}
