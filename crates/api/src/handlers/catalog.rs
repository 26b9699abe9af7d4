//! Handlers for the public catalog: FAQ, drones, positions, reviews.
//!
//! All reads go through the typed table query builder with the same
//! filter/order constants the storefront uses.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mads_core::error::CoreError;
use mads_core::types::DbId;
use mads_db::fetch::{self, DEFAULT_REVIEW_PAGE_SIZE, DEFAULT_SIMILAR_LIMIT};
use mads_db::models::drone::Drone;
use mads_db::models::faq::FaqItem;
use mads_db::models::position::Position;
use mads_db::models::review::{NewReview, Review};
use mads_db::query::{SortDirection, TableQuery};
use mads_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::query::{LimitParams, PageParams};
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Maximum page size for review listing.
const MAX_PAGE_SIZE: i64 = 50;

/// GET /api/v1/faq
///
/// Active FAQ entries in display order.
pub async fn list_faq(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<FaqItem>>>> {
    let data = TableQuery::new("faq")
        .filter("is_active", Some(true))
        .order_by("order", SortDirection::Ascending)
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/drones
///
/// Publicly listed drones, in-stock models first.
pub async fn list_drones(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Drone>>>> {
    let data = TableQuery::new("droneslist")
        .filter("show", Some(true))
        .order_by("in_stock", SortDirection::Descending)
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/drones/{id}
pub async fn get_drone(
    State(state): State<AppState>,
    Path(drone_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Drone>>> {
    let mut rows: Vec<Drone> = TableQuery::new("droneslist")
        .filter("id", Some(drone_id))
        .fetch_all(&state.pool)
        .await?;

    match rows.pop() {
        Some(data) => Ok(Json(DataResponse { data })),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Drone",
            id: drone_id,
        })),
    }
}

/// GET /api/v1/drones/{id}/similar?limit=
///
/// Production-ready drones other than the given one.
pub async fn similar_drones(
    State(state): State<AppState>,
    Path(drone_id): Path<DbId>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<Drone>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT).max(1);
    let data = fetch::similar_drones(&state.pool, drone_id, limit)
        .await
        .map_err(AppError::InternalError)?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/positions
///
/// Open positions sorted by title.
pub async fn list_positions(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Position>>>> {
    let data = TableQuery::new("positions")
        .filter("open", Some(true))
        .order_by("title", SortDirection::Ascending)
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/reviews?page=&page_size=
///
/// One page of reviews, newest first, with the total count for paging.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PagedResponse<Review>>> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params
        .page_size
        .unwrap_or(DEFAULT_REVIEW_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    // Saturate instead of overflowing on absurd page numbers; an
    // out-of-range page is just an empty page.
    let from = (page - 1).saturating_mul(page_size);
    let to = from.saturating_add(page_size - 1);

    let query = TableQuery::new("reviews")
        .order_by("submitted_at", SortDirection::Descending)
        .range(from, to);

    let data = query.fetch_all(&state.pool).await?;
    let count = query.fetch_count(&state.pool).await?;

    Ok(Json(PagedResponse { data, count }))
}

/// POST /api/v1/reviews
///
/// Submit a customer review. Returns 201 with the stored row.
pub async fn create_review(
    State(state): State<AppState>,
    Json(input): Json<NewReview>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    let mut errors = Vec::new();
    if input.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if input.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if input.body.trim().is_empty() {
        errors.push("Review text is required".to_string());
    }
    if !(1..=5).contains(&input.rating) {
        errors.push("Rating must be between 1 and 5".to_string());
    }
    if !mads_core::forms::is_valid_email(input.email.trim()) {
        errors.push("Invalid email format".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors.join(", "))));
    }

    let data = ReviewRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}
