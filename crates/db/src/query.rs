//! Typed single-table query builder.
//!
//! Catalog reads are all the same shape: one table, exact-equality filters,
//! one optional ordering, an optional limit or row range. Rather than pass
//! loosely-typed filter maps around, the supported operations are an explicit
//! vocabulary here and everything else is rejected at compile time. Values
//! are always bound, never interpolated into the SQL text.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::DbPool;

/// Column names that collide with SQL keywords and must be double-quoted.
///
/// The `faq` table's `order` column is the one that bites in practice.
const RESERVED_IDENTS: &[&str] = &["order", "user", "group"];

fn quote_ident(name: &str) -> String {
    if RESERVED_IDENTS.contains(&name) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

/// Sort direction for [`TableQuery::order_by`]. Ascending is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// A value usable in an exact-equality filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

/// A parameterized read against one named table.
///
/// ```ignore
/// let rows: Vec<FaqItem> = TableQuery::new("faq")
///     .filter("is_active", Some(true))
///     .order_by("order", SortDirection::Ascending)
///     .fetch_all(&pool)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct TableQuery {
    table: &'static str,
    columns: &'static str,
    filters: Vec<(&'static str, FilterValue)>,
    order: Option<(&'static str, SortDirection)>,
    limit: Option<i64>,
    range: Option<(i64, i64)>,
}

impl TableQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: "*",
            filters: Vec::new(),
            order: None,
            limit: None,
            range: None,
        }
    }

    /// The table this query reads. Used for error messages.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Override the selected column list (defaults to `*`).
    pub fn columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Add an exact-equality filter.
    ///
    /// A `None` value means "no constraint" and is skipped entirely — it is
    /// never emitted as `column = NULL`.
    pub fn filter<V: Into<FilterValue>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.filters.push((column, value.into()));
        }
        self
    }

    /// Order the result by one column.
    pub fn order_by(mut self, column: &'static str, direction: SortDirection) -> Self {
        self.order = Some((column, direction));
        self
    }

    /// Cap the number of returned rows. Superseded by [`range`](Self::range)
    /// when both are set.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Select a zero-based inclusive row range, for server-side pagination.
    pub fn range(mut self, from: i64, to: i64) -> Self {
        self.range = Some((from, to));
        self
    }

    fn push_filters(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        for (i, (column, value)) in self.filters.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push(quote_ident(column));
            builder.push(" = ");
            match value {
                FilterValue::Bool(v) => builder.push_bind(*v),
                FilterValue::Int(v) => builder.push_bind(*v),
                FilterValue::Text(v) => builder.push_bind(v.clone()),
            };
        }
    }

    fn build_select(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM {}",
            self.columns,
            quote_ident(self.table)
        ));
        self.push_filters(&mut builder);
        if let Some((column, direction)) = self.order {
            builder.push(format!(
                " ORDER BY {} {}",
                quote_ident(column),
                direction.sql()
            ));
        }
        // A range carries its own row cap, so it supersedes a plain limit;
        // emitting both would produce two LIMIT clauses.
        if let Some((from, to)) = self.range {
            builder.push(" LIMIT ");
            builder.push_bind(to - from + 1);
            builder.push(" OFFSET ");
            builder.push_bind(from);
        } else if let Some(limit) = self.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        }
        builder
    }

    /// The generated SQL with `$n` placeholders. Exposed for inspection.
    pub fn sql(&self) -> String {
        self.build_select().sql().to_string()
    }

    /// Run the query and decode every row as `T`.
    pub async fn fetch_all<T>(&self, pool: &DbPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.build_select()
            .build_query_as::<T>()
            .fetch_all(pool)
            .await
    }

    /// Count the rows matching the filter set, ignoring limit and range.
    pub async fn fetch_count(&self, pool: &DbPool) -> Result<i64, sqlx::Error> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT COUNT(*) FROM {}",
            quote_ident(self.table)
        ));
        self.push_filters(&mut builder);
        builder.build_query_scalar::<i64>().fetch_one(pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_select() {
        let sql = TableQuery::new("positions").sql();
        assert_eq!(sql, "SELECT * FROM positions");
    }

    #[test]
    fn test_none_filters_are_skipped() {
        let sql = TableQuery::new("droneslist")
            .filter("show", Some(true))
            .filter::<i64>("id", None)
            .sql();
        assert!(sql.contains("WHERE show = $1"));
        assert!(!sql.contains("id"));
    }

    #[test]
    fn test_multiple_filters_joined_with_and() {
        let sql = TableQuery::new("cart_items")
            .filter("user_id", Some(7_i64))
            .filter("drone_id", Some(3_i64))
            .sql();
        assert!(sql.contains("WHERE user_id = $1 AND drone_id = $2"));
    }

    #[test]
    fn test_order_column_is_quoted() {
        let sql = TableQuery::new("faq")
            .order_by("order", SortDirection::Ascending)
            .sql();
        assert!(sql.ends_with("ORDER BY \"order\" ASC"));
    }

    #[test]
    fn test_ordinary_columns_are_not_quoted() {
        let sql = TableQuery::new("positions")
            .order_by("title", SortDirection::Ascending)
            .sql();
        assert!(sql.ends_with("ORDER BY title ASC"));
    }

    #[test]
    fn test_descending_order() {
        let sql = TableQuery::new("reviews")
            .order_by("submitted_at", SortDirection::Descending)
            .sql();
        assert!(sql.ends_with("ORDER BY submitted_at DESC"));
    }

    #[test]
    fn test_range_maps_to_limit_offset() {
        let sql = TableQuery::new("reviews").range(5, 9).sql();
        assert!(sql.contains("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_range_supersedes_limit() {
        let sql = TableQuery::new("reviews").limit(3).range(5, 9).sql();
        assert!(sql.ends_with("LIMIT $1 OFFSET $2"));
        assert_eq!(sql.matches("LIMIT").count(), 1);
    }

    #[test]
    fn test_limit_only() {
        let sql = TableQuery::new("droneslist").limit(3).sql();
        assert!(sql.ends_with("LIMIT $1"));
        assert!(!sql.contains("OFFSET"));
    }
}
