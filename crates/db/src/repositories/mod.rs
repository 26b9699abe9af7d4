//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cart_repo;
pub mod contact_repo;
pub mod review_repo;
pub mod user_repo;
pub mod wishlist_repo;

pub use cart_repo::CartRepo;
pub use contact_repo::ContactRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
pub use wishlist_repo::WishlistRepo;
