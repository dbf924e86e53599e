use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        category::{Category, CategoryCounts},
        thread::{Thread, ThreadSummary},
    },
};

/// Listing order for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadOrder {
    /// Creation order, oldest first. Replicates the legacy board listing.
    CreationAsc,
    /// Most recently active first, by the derived last-activity timestamp.
    ActivityDesc,
}

// Bounds mirror the column widths. The service DTOs enforce the same limits
// up front; the store re-checks so a direct caller gets a typed validation
// error instead of tripping the CHECK constraint.
const TITLE_MAX_CHARS: usize = 30;
const DESCRIPTION_MAX_CHARS: usize = 200;

pub async fn insert_thread(
    pool: &PgPool,
    category: Category,
    title: &str,
    description: &str,
    created_at: chrono::DateTime<chrono::Utc>,
) -> Result<Thread, AppError> {
    if title.is_empty() || title.chars().count() > TITLE_MAX_CHARS {
        return Err(AppError::Validation(
            "Title must be between 1 and 30 characters".to_string(),
        ));
    }
    if description.is_empty() || description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(AppError::Validation(
            "Description must be between 1 and 200 characters".to_string(),
        ));
    }

    let thread = sqlx::query_as::<_, Thread>(
        r#"
        INSERT INTO threads (category, title, description, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, category, title, description, created_at
        "#,
    )
    .bind(category.as_str())
    .bind(title)
    .bind(description)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create thread: {:?}", e);
        AppError::from(e)
    })?;

    Ok(thread)
}

pub async fn get_thread(pool: &PgPool, id: i64) -> Result<Option<Thread>, AppError> {
    let thread = sqlx::query_as::<_, Thread>(
        r#"
        SELECT id, category, title, description, created_at
        FROM threads
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(thread)
}

/// List one board's threads with their derived activity fields.
///
/// last_activity_at is the created_at of the reply with the highest id, or
/// the thread's own created_at when it has no replies. Recomputed on every
/// read so a fresh reply moves the thread without any stored counter.
pub async fn list_summaries_by_category(
    pool: &PgPool,
    category: Category,
    order: ThreadOrder,
) -> Result<Vec<ThreadSummary>, AppError> {
    let order_clause = match order {
        ThreadOrder::CreationAsc => "t.id ASC",
        ThreadOrder::ActivityDesc => "last_activity_at DESC",
    };

    let sql = format!(
        r#"
        SELECT
            t.id, t.title, t.description, t.created_at,
            COALESCE(
                (SELECT r.created_at FROM replies r
                 WHERE r.thread_id = t.id
                 ORDER BY r.id DESC LIMIT 1),
                t.created_at
            ) AS last_activity_at,
            (SELECT COUNT(*) FROM replies r WHERE r.thread_id = t.id) AS reply_count
        FROM threads t
        WHERE t.category = $1
        ORDER BY {order_clause}
        "#
    );

    let threads = sqlx::query_as::<_, ThreadSummary>(&sql)
        .bind(category.as_str())
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list threads: {:?}", e);
            AppError::from(e)
        })?;

    Ok(threads)
}

/// Thread count for each of the four categories; absent categories are zero.
pub async fn count_threads_per_category(pool: &PgPool) -> Result<CategoryCounts, AppError> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT category, COUNT(*)
        FROM threads
        GROUP BY category
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut counts = CategoryCounts::default();
    for (category, count) in rows {
        // The CHECK constraint keeps out-of-set rows out of the table.
        let category = category
            .parse::<Category>()
            .map_err(|_| AppError::Invariant(format!("Stored category '{}'", category)))?;
        counts.set(category, count);
    }

    Ok(counts)
}
