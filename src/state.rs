//! Shared application state, built once in main and cloned per request.

use crate::config::Config;
use axum::extract::FromRef;
use sqlx::PgPool;

/// The durable-store handle plus process-wide configuration. The pool is the
/// only shared mutable resource; everything else is request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

// Most handlers only read the forum and take `State<PgPool>`; the auth
// handlers additionally take `State<Config>` for JWT signing. These impls
// let axum hand out either slice without widening handler signatures.
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
