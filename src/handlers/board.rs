use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        category::Category,
        thread::{CreateThreadRequest, ThreadListParams},
    },
    services,
};

/// List a board's threads.
/// An unknown category segment is a 404, not a validation failure.
pub async fn list_threads(
    State(pool): State<PgPool>,
    Path(category): Path<String>,
    Query(params): Query<ThreadListParams>,
) -> Result<impl IntoResponse, AppError> {
    let category = category.parse::<Category>()?;

    let threads = services::board::list_threads(&pool, category, &params).await?;

    Ok(Json(threads))
}

/// Start a new thread on a board.
pub async fn create_thread(
    State(pool): State<PgPool>,
    Path(category): Path<String>,
    Json(payload): Json<CreateThreadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = category.parse::<Category>()?;

    let summary = services::board::create_thread(&pool, category, payload).await?;

    Ok((StatusCode::CREATED, Json(summary)))
}
