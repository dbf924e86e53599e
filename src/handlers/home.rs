use axum::{Json, extract::State, response::IntoResponse};
use sqlx::PgPool;

use crate::{error::AppError, services};

/// Home summary: thread count per category.
pub async fn summary(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let counts = services::board::category_counts(&pool).await?;

    Ok(Json(counts))
}
