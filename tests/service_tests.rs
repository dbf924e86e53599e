// tests/service_tests.rs
//
// Service-level tests against a live Postgres database.
// Requires DATABASE_URL to be set.

use forum::error::AppError;
use forum::models::category::Category;
use forum::models::reply::CreateReplyRequest;
use forum::models::thread::{CreateThreadRequest, ThreadListParams};
use forum::services;
use forum::store;
use forum::utils::jwt::Claims;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

async fn test_pool() -> PgPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

/// Insert a user directly through the store; login is not under test here.
async fn seed_user(pool: &PgPool) -> i64 {
    let tag = &uuid::Uuid::new_v4().to_string()[..8];
    let user = store::users::insert_user(
        pool,
        &format!("{}@example.com", tag),
        &format!("u_{}", tag),
        "Test User",
        "$argon2id$not-a-real-hash",
        chrono::Utc::now(),
    )
    .await
    .expect("Failed to seed user");

    user.id
}

fn claims_for(user_id: i64) -> Claims {
    Claims {
        sub: user_id.to_string(),
        roles: vec![],
        exp: usize::MAX,
    }
}

fn new_thread(title: &str, description: &str) -> CreateThreadRequest {
    CreateThreadRequest {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[tokio::test]
async fn thread_listing_is_partitioned_by_category() {
    let pool = test_pool().await;

    let created = services::board::create_thread(
        &pool,
        Category::Board,
        new_thread("Chess openings", "Discuss e4 vs d4"),
    )
    .await
    .unwrap();

    let board = services::board::list_threads(&pool, Category::Board, &ThreadListParams::default())
        .await
        .unwrap();
    let summary = board
        .iter()
        .find(|t| t.id == created.id)
        .expect("created thread must appear on its own board");
    assert_eq!(summary.title, "Chess openings");
    assert_eq!(summary.reply_count, 0);

    let card = services::board::list_threads(&pool, Category::Card, &ThreadListParams::default())
        .await
        .unwrap();
    assert!(card.iter().all(|t| t.id != created.id));
}

#[tokio::test]
async fn fresh_thread_activity_is_its_creation_time() {
    let pool = test_pool().await;

    let created = services::board::create_thread(
        &pool,
        Category::Games,
        new_thread("No replies yet", "Nothing has happened here"),
    )
    .await
    .unwrap();

    let listing =
        services::board::list_threads(&pool, Category::Games, &ThreadListParams::default())
            .await
            .unwrap();
    let summary = listing.iter().find(|t| t.id == created.id).unwrap();

    assert_eq!(summary.last_activity_at, summary.created_at);
}

#[tokio::test]
async fn replies_are_ordered_and_drive_last_activity() {
    let pool = test_pool().await;
    let user_id = seed_user(&pool).await;
    let claims = claims_for(user_id);

    let thread = services::board::create_thread(
        &pool,
        Category::Games,
        new_thread("Speedrun routes", "Which route is fastest?"),
    )
    .await
    .unwrap();

    let first = services::thread::post_reply(
        &pool,
        Some(&claims),
        thread.id,
        CreateReplyRequest {
            message: "Glitchless is safer".to_string(),
        },
    )
    .await
    .unwrap();

    let second = services::thread::post_reply(
        &pool,
        Some(&claims),
        thread.id,
        CreateReplyRequest {
            message: "Nice line!".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(second.id > first.id);

    let detail = services::thread::get_thread_detail(&pool, thread.id)
        .await
        .unwrap();
    assert_eq!(detail.replies.len(), 2);
    assert!(detail.replies.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(detail.replies.last().unwrap().message, "Nice line!");
    assert_eq!(detail.replies.last().unwrap().user_id, user_id);

    // The derived activity timestamp follows the newest reply.
    let listing =
        services::board::list_threads(&pool, Category::Games, &ThreadListParams::default())
            .await
            .unwrap();
    let summary = listing.iter().find(|t| t.id == thread.id).unwrap();
    assert_eq!(summary.reply_count, 2);
    assert_eq!(summary.last_activity_at, second.created_at);

    // Stable across repeated reads while nothing new is inserted.
    let again = services::thread::get_thread_detail(&pool, thread.id)
        .await
        .unwrap();
    let ids: Vec<i64> = detail.replies.iter().map(|r| r.id).collect();
    let ids_again: Vec<i64> = again.replies.iter().map(|r| r.id).collect();
    assert_eq!(ids, ids_again);
}

#[tokio::test]
async fn anonymous_reply_is_refused_and_persists_nothing() {
    let pool = test_pool().await;

    let thread = services::board::create_thread(
        &pool,
        Category::Board,
        new_thread("Backgammon", "Anyone still playing?"),
    )
    .await
    .unwrap();

    let before = store::replies::count_by_thread(&pool, thread.id).await.unwrap();

    let err = services::thread::post_reply(
        &pool,
        None,
        thread.id,
        CreateReplyRequest {
            message: "drive-by reply".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized(_)));

    let after = store::replies::count_by_thread(&pool, thread.id).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn inactive_user_cannot_reply() {
    let pool = test_pool().await;
    let user_id = seed_user(&pool).await;

    sqlx::query("UPDATE users SET active = FALSE WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let thread = services::board::create_thread(
        &pool,
        Category::Card,
        new_thread("Bridge bidding", "Conventions thread"),
    )
    .await
    .unwrap();

    let err = services::thread::post_reply(
        &pool,
        Some(&claims_for(user_id)),
        thread.id,
        CreateReplyRequest {
            message: "should not land".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn empty_fields_are_rejected_and_persist_nothing() {
    let pool = test_pool().await;

    let before =
        services::board::list_threads(&pool, Category::Sports, &ThreadListParams::default())
            .await
            .unwrap()
            .len();

    let err = services::board::create_thread(&pool, Category::Sports, new_thread("", "a body"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = services::board::create_thread(&pool, Category::Sports, new_thread("a title", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Oversized title (limit is 30 chars) is rejected too.
    let err = services::board::create_thread(
        &pool,
        Category::Sports,
        new_thread(&"x".repeat(31), "a body"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let after =
        services::board::list_threads(&pool, Category::Sports, &ThreadListParams::default())
            .await
            .unwrap()
            .len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn store_rejects_out_of_bounds_fields_directly() {
    let pool = test_pool().await;

    // The store honors the bounds contract itself, independent of the
    // service-layer DTO validation.
    let err = store::threads::insert_thread(&pool, Category::Sports, "", "a body", chrono::Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = store::threads::insert_thread(
        &pool,
        Category::Sports,
        &"x".repeat(31),
        "a body",
        chrono::Utc::now(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let user_id = seed_user(&pool).await;
    let thread = services::board::create_thread(
        &pool,
        Category::Sports,
        new_thread("Bounds check", "store-level limits"),
    )
    .await
    .unwrap();

    let err = store::replies::insert_reply(&pool, thread.id, user_id, "", chrono::Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = store::replies::insert_reply(
        &pool,
        thread.id,
        user_id,
        &"x".repeat(201),
        chrono::Utc::now(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let count = store::replies::count_by_thread(&pool, thread.id).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn reply_to_missing_thread_is_not_found() {
    let pool = test_pool().await;
    let user_id = seed_user(&pool).await;

    // BIGSERIAL ids start at 1, so 0 never exists.
    let err = services::thread::post_reply(
        &pool,
        Some(&claims_for(user_id)),
        0,
        CreateReplyRequest {
            message: "into the void".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn activity_sort_puts_most_recent_first() {
    let pool = test_pool().await;
    let user_id = seed_user(&pool).await;
    let claims = claims_for(user_id);

    let older = services::board::create_thread(
        &pool,
        Category::Games,
        new_thread("Older thread", "created first"),
    )
    .await
    .unwrap();
    let newer = services::board::create_thread(
        &pool,
        Category::Games,
        new_thread("Newer thread", "created second"),
    )
    .await
    .unwrap();

    // A reply to the older thread makes it the most recently active.
    services::thread::post_reply(
        &pool,
        Some(&claims),
        older.id,
        CreateReplyRequest {
            message: "bump".to_string(),
        },
    )
    .await
    .unwrap();

    let params = ThreadListParams {
        sort: Some("activity".to_string()),
    };
    let listing = services::board::list_threads(&pool, Category::Games, &params)
        .await
        .unwrap();

    let pos_older = listing.iter().position(|t| t.id == older.id).unwrap();
    let pos_newer = listing.iter().position(|t| t.id == newer.id).unwrap();
    assert!(pos_older < pos_newer);
}
