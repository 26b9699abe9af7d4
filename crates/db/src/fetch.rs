//! Stateful table fetcher.
//!
//! [`TableFetcher`] wraps a [`TableQuery`] and mirrors the last successful
//! read: rows, optional total count, a human-readable error slot, and a
//! loading flag. Failures never clear previously loaded rows — stale data
//! stays visible while the error is shown, and `refetch` is the manual
//! retry affordance. There is no caching, de-duplication, or automatic
//! retry anywhere in this layer.

use mads_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

use crate::models::drone::Drone;
use crate::models::faq::FaqItem;
use crate::models::position::Position;
use crate::models::review::Review;
use crate::query::{SortDirection, TableQuery};
use crate::DbPool;

/// Cap for the "similar drones" strip when no explicit limit is given.
pub const DEFAULT_SIMILAR_LIMIT: i64 = 3;

/// Default page size for review pagination.
pub const DEFAULT_REVIEW_PAGE_SIZE: i64 = 5;

fn is_connectivity_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
    )
}

/// Render a fetch failure as the message shown to the user, with
/// connectivity problems called out distinctly from query errors.
pub(crate) fn load_error(what: &str, err: &sqlx::Error) -> String {
    if is_connectivity_error(err) {
        format!("Failed to load {what}: network connection failed, please check your connection")
    } else {
        format!("Failed to load {what}: {err}")
    }
}

/// One parameterized read exposed as reactive-style state.
#[derive(Debug)]
pub struct TableFetcher<T> {
    pool: DbPool,
    query: TableQuery,
    with_count: bool,
    data: Vec<T>,
    count: Option<i64>,
    error: Option<String>,
    is_loading: bool,
}

impl<T> TableFetcher<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    /// Wrap a query. Nothing is fetched until [`refetch`](Self::refetch).
    pub fn new(pool: DbPool, query: TableQuery) -> Self {
        Self {
            pool,
            query,
            with_count: false,
            data: Vec::new(),
            count: None,
            error: None,
            is_loading: false,
        }
    }

    /// Also fetch the total matching-row count on every read. Implied by
    /// paginated constructors like [`reviews`].
    pub fn with_count(mut self) -> Self {
        self.with_count = true;
        self
    }

    /// Run (or re-run) the read. Idempotent and safe to call repeatedly.
    ///
    /// On success the row set (empty when nothing matches) and count
    /// replace the previous ones; on failure the error slot is filled and
    /// the previous rows are left untouched.
    pub async fn refetch(&mut self) {
        self.is_loading = true;
        self.error = None;

        let table = self.query.table();
        tracing::debug!(table, "fetching rows");

        match self.query.fetch_all::<T>(&self.pool).await {
            Ok(rows) => {
                if self.with_count {
                    match self.query.fetch_count(&self.pool).await {
                        Ok(count) => self.count = Some(count),
                        Err(err) => {
                            tracing::error!(table, error = %err, "count query failed");
                            self.error = Some(load_error(table, &err));
                            self.is_loading = false;
                            return;
                        }
                    }
                }
                tracing::debug!(table, rows = rows.len(), "fetch succeeded");
                self.data = rows;
            }
            Err(err) => {
                tracing::error!(table, error = %err, "fetch failed");
                self.error = Some(load_error(table, &err));
            }
        }

        self.is_loading = false;
    }

    /// Rows from the last successful read.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Total matching-row count, when requested.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Message from the last failed read, cleared on the next attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

/// Active FAQ entries in display order.
pub fn faq(pool: DbPool) -> TableFetcher<FaqItem> {
    let query = TableQuery::new("faq")
        .filter("is_active", Some(true))
        .order_by("order", SortDirection::Ascending);
    TableFetcher::new(pool, query)
}

/// Publicly listed drones, in-stock models first.
pub fn drones(pool: DbPool) -> TableFetcher<Drone> {
    let query = TableQuery::new("droneslist")
        .filter("show", Some(true))
        .order_by("in_stock", SortDirection::Descending);
    TableFetcher::new(pool, query)
}

/// Open positions sorted by title.
pub fn positions(pool: DbPool) -> TableFetcher<Position> {
    let query = TableQuery::new("positions")
        .filter("open", Some(true))
        .order_by("title", SortDirection::Ascending);
    TableFetcher::new(pool, query)
}

/// One page of reviews, newest first, with the total count for paging.
///
/// `page` is one-based: page 2 with a page size of 5 reads rows 5..=9.
pub fn reviews(pool: DbPool, page: i64, page_size: i64) -> TableFetcher<Review> {
    let from = (page - 1).saturating_mul(page_size);
    let to = from.saturating_add(page_size - 1);
    let query = TableQuery::new("reviews")
        .order_by("submitted_at", SortDirection::Descending)
        .range(from, to);
    TableFetcher::new(pool, query).with_count()
}

/// A single drone by id.
pub fn drone_by_id(pool: DbPool, id: DbId) -> TableFetcher<Drone> {
    let query = TableQuery::new("droneslist").filter("id", Some(id));
    TableFetcher::new(pool, query)
}

/// Production-ready drones other than `exclude_id`, capped to `limit`.
///
/// A one-off query rather than a [`TableQuery`]: the builder's filter
/// vocabulary is equality only, and this read needs a negated match.
pub async fn similar_drones(
    pool: &DbPool,
    exclude_id: DbId,
    limit: i64,
) -> Result<Vec<Drone>, String> {
    sqlx::query_as::<_, Drone>(
        "SELECT * FROM droneslist \
         WHERE id <> $1 AND produced = TRUE \
         LIMIT $2",
    )
    .bind(exclude_id)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|err| {
        tracing::error!(error = %err, "similar drones fetch failed");
        load_error("similar drones", &err)
    })
}
