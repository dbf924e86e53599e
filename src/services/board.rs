//! Category thread service: the per-category board.

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::{Category, CategoryCounts},
        thread::{CreateThreadRequest, ThreadListParams, ThreadSummary},
    },
    store,
    store::threads::ThreadOrder,
};

/// List one board's threads.
///
/// Default order is creation order ascending, matching the legacy listing;
/// `sort=activity` selects most-recently-active first instead. Any other
/// value falls back to the default.
pub async fn list_threads(
    pool: &PgPool,
    category: Category,
    params: &ThreadListParams,
) -> Result<Vec<ThreadSummary>, AppError> {
    let order = match params.sort.as_deref() {
        Some("activity") => ThreadOrder::ActivityDesc,
        _ => ThreadOrder::CreationAsc,
    };

    store::threads::list_summaries_by_category(pool, category, order).await
}

/// Start a new thread on a board.
///
/// The category comes from the route context as the closed enum, so it is
/// valid by construction; only title and description need validating.
pub async fn create_thread(
    pool: &PgPool,
    category: Category,
    payload: CreateThreadRequest,
) -> Result<ThreadSummary, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let thread = store::threads::insert_thread(
        pool,
        category,
        &payload.title,
        &payload.description,
        Utc::now(),
    )
    .await?;

    // A fresh thread has no replies: its activity is its own creation.
    Ok(ThreadSummary {
        id: thread.id,
        title: thread.title,
        description: thread.description,
        created_at: thread.created_at,
        last_activity_at: thread.created_at,
        reply_count: 0,
    })
}

/// Thread counts per category for the home summary.
pub async fn category_counts(pool: &PgPool) -> Result<CategoryCounts, AppError> {
    store::threads::count_threads_per_category(pool).await
}
