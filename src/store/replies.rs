use sqlx::PgPool;

use crate::{
    error::AppError,
    models::reply::{Reply, ReplyView},
};

// Mirrors the column width; re-checked here so a direct store caller gets a
// typed validation error instead of tripping the CHECK constraint.
const MESSAGE_MAX_CHARS: usize = 200;

/// Append a reply to a thread.
///
/// Runs in a single transaction: the thread-existence check and the insert
/// commit together or not at all, so a failed creation persists nothing.
/// The reply id is assigned by the sequence at commit, which is what gives
/// replies their per-thread total order under concurrent posting.
pub async fn insert_reply(
    pool: &PgPool,
    thread_id: i64,
    user_id: i64,
    message: &str,
    created_at: chrono::DateTime<chrono::Utc>,
) -> Result<Reply, AppError> {
    if message.is_empty() || message.chars().count() > MESSAGE_MAX_CHARS {
        return Err(AppError::Validation(
            "Message must be between 1 and 200 characters".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let thread_exists = sqlx::query_scalar::<_, i64>("SELECT id FROM threads WHERE id = $1")
        .bind(thread_id)
        .fetch_optional(&mut *tx)
        .await?;

    if thread_exists.is_none() {
        return Err(AppError::NotFound(format!("Thread {} not found", thread_id)));
    }

    let reply = sqlx::query_as::<_, Reply>(
        r#"
        INSERT INTO replies (thread_id, user_id, message, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, thread_id, user_id, message, created_at
        "#,
    )
    .bind(thread_id)
    .bind(user_id)
    .bind(message)
    .bind(created_at)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create reply: {:?}", e);
        AppError::from(e)
    })?;

    tx.commit().await?;

    Ok(reply)
}

/// All replies of a thread with author info, ascending by id.
pub async fn list_by_thread(pool: &PgPool, thread_id: i64) -> Result<Vec<ReplyView>, AppError> {
    let replies = sqlx::query_as::<_, ReplyView>(
        r#"
        SELECT r.id, r.thread_id, r.user_id, u.username, r.message, r.created_at
        FROM replies r
        JOIN users u ON r.user_id = u.id
        WHERE r.thread_id = $1
        ORDER BY r.id ASC
        "#,
    )
    .bind(thread_id)
    .fetch_all(pool)
    .await?;

    Ok(replies)
}

pub async fn count_by_thread(pool: &PgPool, thread_id: i64) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM replies WHERE thread_id = $1",
    )
    .bind(thread_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
