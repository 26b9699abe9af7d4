//! Repository for the `reviews` table.

use sqlx::PgPool;

use crate::models::review::{NewReview, Review};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, name, title, body, rating, email, submitted_at";

/// Provides write access for customer reviews. Reads go through the
/// catalog query builder.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review with a server-generated submission time.
    pub async fn create(pool: &PgPool, review: &NewReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (name, title, body, rating, email) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&review.name)
            .bind(&review.title)
            .bind(&review.body)
            .bind(review.rating)
            .bind(&review.email)
            .fetch_one(pool)
            .await
    }
}
