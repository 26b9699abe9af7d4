//! Route tree for the API.

pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                    register (public)
/// /auth/login                       login (public)
///
/// /faq                              active FAQ entries
/// /drones                           listed drones
/// /drones/{id}                      one drone
/// /drones/{id}/similar              production-ready alternatives
/// /positions                        open positions
/// /reviews                          paginated reviews (GET), submit (POST)
///
/// /cart                             list (GET), add (POST)       [auth]
/// /cart/{id}                        set quantity (PUT), remove (DELETE)
/// /cart/contains/{drone_id}         membership check
///
/// /wishlist                         list (GET), add (POST)       [auth]
/// /wishlist/{id}                    remove (DELETE)
/// /wishlist/{id}/move-to-cart       transactional move (POST)
/// /wishlist/contains/{drone_id}     membership check
///
/// /contact                          contact form (POST)
/// /applications                     job application (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .merge(catalog_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .route("/contact", post(handlers::forms::submit_contact))
        .route("/applications", post(handlers::forms::submit_application))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/faq", get(handlers::catalog::list_faq))
        .route("/drones", get(handlers::catalog::list_drones))
        .route("/drones/{id}", get(handlers::catalog::get_drone))
        .route("/drones/{id}/similar", get(handlers::catalog::similar_drones))
        .route("/positions", get(handlers::catalog::list_positions))
        .route(
            "/reviews",
            get(handlers::catalog::list_reviews).post(handlers::catalog::create_review),
        )
}

fn cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::cart::list_cart).post(handlers::cart::add_to_cart),
        )
        .route(
            "/{id}",
            put(handlers::cart::update_quantity).delete(handlers::cart::remove_from_cart),
        )
        .route("/contains/{drone_id}", get(handlers::cart::contains))
}

fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::wishlist::list_wishlist).post(handlers::wishlist::add_to_wishlist),
        )
        .route("/{id}", delete(handlers::wishlist::remove_from_wishlist))
        .route(
            "/{id}/move-to-cart",
            post(handlers::wishlist::move_to_cart),
        )
        .route("/contains/{drone_id}", get(handlers::wishlist::contains))
}
