use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'threads' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Thread {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Listing row for a board: the thread plus its derived activity fields.
///
/// `last_activity_at` is the created_at of the thread's newest reply (highest
/// id), or the thread's own created_at when it has none. Both it and
/// `reply_count` are computed in SQL on every read, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ThreadSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_activity_at: chrono::DateTime<chrono::Utc>,
    pub reply_count: i64,
}

/// DTO for starting a new thread.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(
        min = 1,
        max = 30,
        message = "Title must be between 1 and 30 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Description must be between 1 and 200 characters"
    ))]
    pub description: String,
}

/// Query parameters for listing threads.
#[derive(Debug, Default, Deserialize)]
pub struct ThreadListParams {
    /// 'created' (default) or 'activity' for most-recently-active first.
    pub sort: Option<String>,
}
