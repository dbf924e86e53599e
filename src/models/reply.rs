use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'replies' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub thread_id: i64,
    pub user_id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for posting a reply.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Message must be between 1 and 200 characters"
    ))]
    pub message: String,
}

/// DTO for displaying a reply with author info.
#[derive(Debug, Serialize, FromRow)]
pub struct ReplyView {
    pub id: i64,
    pub thread_id: i64,
    pub user_id: i64,
    pub username: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
