use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use tracing::debug;
use uuid::Uuid;

use buildboard_core::AppState;

pub const LOGIN_PATH: &str = "/login";

/// The signed-in user, as identified by the upstream auth gateway.
///
/// Requests without a valid user header are redirected to the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(state.auth_user_header.as_str())
            .and_then(|value| value.to_str().ok());

        match raw.and_then(|value| Uuid::parse_str(value.trim()).ok()) {
            Some(id) => Ok(Self { id }),
            None => {
                debug!(path = %parts.uri.path(), "no signed-in user; redirecting to login");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}
