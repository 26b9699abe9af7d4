//! Integration tests for the table query builder against a real database.

use mads_db::models::faq::FaqItem;
use mads_db::models::review::Review;
use mads_db::query::{SortDirection, TableQuery};
use sqlx::PgPool;

async fn seed_faq(pool: &PgPool, question: &str, is_active: bool, order: i32) {
    sqlx::query("INSERT INTO faq (question, answer, is_active, \"order\") VALUES ($1, 'a', $2, $3)")
        .bind(question)
        .bind(is_active)
        .bind(order)
        .execute(pool)
        .await
        .unwrap();
}

async fn seed_review(pool: &PgPool, title: &str, age_secs: i32) {
    sqlx::query(
        "INSERT INTO reviews (name, title, body, rating, email, submitted_at) \
         VALUES ('Reviewer', $1, 'body', 5, 'r@example.com', NOW() - make_interval(secs => $2))",
    )
    .bind(title)
    .bind(f64::from(age_secs))
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test]
async fn test_faq_filtered_and_sorted_by_order(pool: PgPool) {
    seed_faq(&pool, "second", true, 2).await;
    seed_faq(&pool, "first", true, 1).await;
    seed_faq(&pool, "third", true, 3).await;
    seed_faq(&pool, "hidden", false, 0).await;

    let rows: Vec<FaqItem> = TableQuery::new("faq")
        .filter("is_active", Some(true))
        .order_by("order", SortDirection::Ascending)
        .fetch_all(&pool)
        .await
        .unwrap();

    let questions: Vec<&str> = rows.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(questions, ["first", "second", "third"]);
    assert_eq!(rows.iter().map(|r| r.order).collect::<Vec<_>>(), [1, 2, 3]);
}

#[sqlx::test]
async fn test_none_filter_applies_no_constraint(pool: PgPool) {
    seed_faq(&pool, "visible", true, 1).await;
    seed_faq(&pool, "hidden", false, 2).await;

    let rows: Vec<FaqItem> = TableQuery::new("faq")
        .filter::<bool>("is_active", None)
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
}

#[sqlx::test]
async fn test_review_pagination_requests_expected_rows(pool: PgPool) {
    // Reviews r00 (newest) .. r11 (oldest).
    for i in 0..12 {
        seed_review(&pool, &format!("r{i:02}"), i).await;
    }

    // Page 2 with page size 5 is rows [5, 9] of the newest-first ordering.
    let page = 2;
    let page_size = 5;
    let from = (page - 1) * page_size;
    let to = from + page_size - 1;

    let query = TableQuery::new("reviews")
        .order_by("submitted_at", SortDirection::Descending)
        .range(from, to);

    let rows: Vec<Review> = query.fetch_all(&pool).await.unwrap();
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["r05", "r06", "r07", "r08", "r09"]);

    // The count ignores the range and reflects every matching row.
    assert_eq!(query.fetch_count(&pool).await.unwrap(), 12);
}

#[sqlx::test]
async fn test_limit_caps_rows(pool: PgPool) {
    for i in 0..5 {
        seed_faq(&pool, &format!("q{i}"), true, i).await;
    }

    let rows: Vec<FaqItem> = TableQuery::new("faq")
        .order_by("order", SortDirection::Ascending)
        .limit(2)
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
}

#[sqlx::test]
async fn test_empty_result_is_empty_vec(pool: PgPool) {
    let rows: Vec<FaqItem> = TableQuery::new("faq")
        .filter("is_active", Some(true))
        .fetch_all(&pool)
        .await
        .unwrap();
    assert!(rows.is_empty());
}
