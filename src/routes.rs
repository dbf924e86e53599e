// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, board, home, thread},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, boards, threads).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let board_routes = Router::new().route(
        "/{category}/threads",
        get(board::list_threads).post(board::create_thread),
    );

    let thread_routes = Router::new()
        .route("/{id}", get(thread::get_thread))
        .route("/{id}/replies", post(thread::create_reply));

    Router::new()
        .route("/api/home", get(home::summary))
        .nest("/api/auth", auth_routes)
        .nest("/api/boards", board_routes)
        .nest("/api/threads", thread_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
