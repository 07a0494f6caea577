use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use buildboard_pages::layout::titled_shell;
use buildboard_pages::messages::INTERNAL_ERROR;
use buildboard_pages::profile::render_not_found;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("profile `{0}` not found")]
    ProfileNotFound(String),

    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ProfileNotFound(username) => {
                (StatusCode::NOT_FOUND, Html(render_not_found(&username))).into_response()
            }
            AppError::Internal(err) => {
                error!(?err, "request failed");
                let body = format!("<p>{INTERNAL_ERROR}</p>");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(titled_shell("Error", &body)),
                )
                    .into_response()
            }
        }
    }
}
