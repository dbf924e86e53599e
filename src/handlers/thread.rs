use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError, models::reply::CreateReplyRequest, services, utils::jwt::MaybeIdentity,
};

/// Single thread with its full reply sequence.
pub async fn get_thread(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let detail = services::thread::get_thread_detail(&pool, id).await?;

    Ok(Json(detail))
}

/// Post a reply. The identity is optional at the transport layer; the
/// service refuses anonymous callers with a 401.
pub async fn create_reply(
    State(pool): State<PgPool>,
    MaybeIdentity(identity): MaybeIdentity,
    Path(id): Path<i64>,
    Json(payload): Json<CreateReplyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let reply = services::thread::post_reply(&pool, identity.as_ref(), id, payload).await?;

    Ok((StatusCode::CREATED, Json(reply)))
}
