use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use tracing::{info, warn};

use buildboard_core::AppState;
use buildboard_database::ProfileUpdate;
use buildboard_database::impls::profiles::{
    get_profile, get_profile_by_username, list_leaderboard, update_profile,
};
use buildboard_pages::leaderboard::{self, Standings};
use buildboard_pages::settings::{self, SettingsForm, SettingsMessage};
use buildboard_pages::profile;

use crate::auth::CurrentUser;
use crate::error::AppError;

pub async fn index() -> Redirect {
    Redirect::to(leaderboard::META.path)
}

pub async fn health() -> &'static str {
    "ok"
}

/// Fetch failures are indistinguishable from an empty leaderboard for visitors.
pub async fn leaderboard_page(State(state): State<AppState>) -> Html<String> {
    let profiles = match list_leaderboard(&state.db, state.leaderboard_limit).await {
        Ok(profiles) => profiles,
        Err(err) => {
            warn!(?err, "leaderboard fetch failed; rendering empty state");
            Vec::new()
        }
    };

    Html(leaderboard::render(&Standings::from_profiles(profiles)))
}

pub async fn profile_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Html<String>, AppError> {
    match get_profile_by_username(&state.db, &username).await? {
        Some(found) => Ok(Html(profile::render(&found))),
        None => Err(AppError::ProfileNotFound(username)),
    }
}

pub async fn settings_page(State(state): State<AppState>, user: CurrentUser) -> Html<String> {
    let (form, message) = match get_profile(&state.db, user.id).await {
        Ok(Some(stored)) => (SettingsForm::from_profile(&stored), None),
        Ok(None) => (SettingsForm::default(), None),
        Err(err) => {
            warn!(?err, user_id = %user.id, "failed to load profile for settings");
            (
                SettingsForm::default(),
                Some(SettingsMessage::Error(format!("{err:#}"))),
            )
        }
    };

    Html(settings::render(&form, message.as_ref()))
}

pub async fn settings_submit(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<SettingsForm>,
) -> Html<String> {
    let update = ProfileUpdate::from(form.clone());

    let outcome = update_profile(&state.db, user.id, &update)
        .await
        .map_err(|err| update_error_text(&err));

    match &outcome {
        Ok(true) => info!(user_id = %user.id, "profile updated"),
        Ok(false) => warn!(user_id = %user.id, "profile update matched no rows"),
        Err(text) => warn!(user_id = %user.id, error = %text, "profile update failed"),
    }

    let message = SettingsMessage::from_update(outcome);
    Html(settings::render(&form, Some(&message)))
}

/// The backend's own message for database errors, the driver's description otherwise.
fn update_error_text(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_owned(),
        other => other.to_string(),
    }
}
