use sqlx::PgPool;

use crate::{
    error::AppError,
    models::user::{Principal, User},
};

/// Create a user. Email and username are unique; a duplicate surfaces as
/// `Conflict` rather than a bare database error.
pub async fn insert_user(
    pool: &PgPool,
    email: &str,
    username: &str,
    name: &str,
    password_hash: &str,
    confirmed_at: chrono::DateTime<chrono::Utc>,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, username, name, password, active, confirmed_at)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING id, email, username, name, password, active, confirmed_at
        "#,
    )
    .bind(email)
    .bind(username)
    .bind(name)
    .bind(password_hash)
    .bind(confirmed_at)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        // Postgres error code for unique violation is 23505
        if e.to_string().contains("unique constraint") || e.to_string().contains("23505") {
            AppError::Conflict("Email or username already taken".to_string())
        } else {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::from(e)
        }
    })?;

    Ok(user)
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, name, password, active, confirmed_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Identity slice for authorization: active flag plus role names through the
/// roles_users membership relation.
pub async fn get_principal(pool: &PgPool, user_id: i64) -> Result<Option<Principal>, AppError> {
    let row = sqlx::query_as::<_, (i64, bool, Vec<String>)>(
        r#"
        SELECT
            u.id, u.active,
            COALESCE(
                array_agg(r.name) FILTER (WHERE r.name IS NOT NULL),
                '{}'
            ) AS roles
        FROM users u
        LEFT JOIN roles_users ru ON ru.user_id = u.id
        LEFT JOIN roles r ON r.id = ru.role_id
        WHERE u.id = $1
        GROUP BY u.id
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(user_id, active, roles)| Principal {
        user_id,
        active,
        roles,
    }))
}
