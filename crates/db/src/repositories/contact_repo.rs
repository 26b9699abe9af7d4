//! Repository for the `contact` table.

use mads_core::forms::ContactForm;
use sqlx::PgPool;

use crate::models::contact::ContactMessage;

/// Column list for `contact` queries.
const COLUMNS: &str = "id, first_name, last_name, email, phone, message, created_at";

/// Persists contact form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a submission with a server-generated timestamp, returning
    /// the stored row. The form is validated before this is called.
    pub async fn create(pool: &PgPool, form: &ContactForm) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact (first_name, last_name, email, phone, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&form.first_name)
            .bind(&form.last_name)
            .bind(&form.email)
            .bind(&form.phone)
            .bind(&form.message)
            .fetch_one(pool)
            .await
    }
}
