pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use buildboard_core::AppState;
use buildboard_pages::{leaderboard, profile, settings};

/// Build the application router with every page mounted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route(leaderboard::META.path, get(routes::leaderboard_page))
        .route(profile::META.path, get(routes::profile_page))
        .route(
            settings::META.path,
            get(routes::settings_page).post(routes::settings_submit),
        )
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
