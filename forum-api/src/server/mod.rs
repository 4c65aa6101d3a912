// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use tracing::info;

use self::state::AppState;
use crate::config::create_cors_layer;

/// Create the Axum application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/subjects",
            get(handlers::subjects::list_subjects).post(handlers::subjects::create_subject),
        )
        .route("/api/subjects/:id/vote", post(handlers::subjects::vote_subject))
        .route(
            "/api/subjects/:id/comments",
            get(handlers::comments::list_comments).post(handlers::comments::create_comment),
        )
        .route(
            "/api/subjects/:id/comments/:comment_id/vote",
            post(handlers::comments::vote_comment),
        )
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
