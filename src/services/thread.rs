//! Thread detail service: single-thread view and reply posting.

use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        reply::{CreateReplyRequest, Reply, ReplyView},
        thread::Thread,
    },
    services::authz,
    store,
    utils::jwt::Claims,
};

/// A thread with its full reply sequence, ascending by id. No pagination.
#[derive(Debug, Serialize)]
pub struct ThreadDetail {
    pub thread: Thread,
    pub replies: Vec<ReplyView>,
}

pub async fn get_thread_detail(pool: &PgPool, thread_id: i64) -> Result<ThreadDetail, AppError> {
    let thread = store::threads::get_thread(pool, thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Thread {} not found", thread_id)))?;

    let replies = store::replies::list_by_thread(pool, thread_id).await?;

    Ok(ThreadDetail { thread, replies })
}

/// Post a reply on behalf of an authenticated identity.
///
/// An absent identity is refused before anything touches the store; a stale
/// token whose user no longer exists, or an inactive account, is refused by
/// the gate. Thread existence is checked inside the store's transaction.
pub async fn post_reply(
    pool: &PgPool,
    identity: Option<&Claims>,
    thread_id: i64,
    payload: CreateReplyRequest,
) -> Result<Reply, AppError> {
    let claims = identity
        .ok_or_else(|| AppError::Unauthorized("You must be logged in to reply".to_string()))?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::Unauthorized("Invalid identity".to_string()))?;

    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let principal = store::users::get_principal(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

    if !authz::can_post_reply(&principal) {
        return Err(AppError::Unauthorized(
            "This account is not allowed to post".to_string(),
        ));
    }

    store::replies::insert_reply(pool, thread_id, user_id, &payload.message, Utc::now()).await
}
