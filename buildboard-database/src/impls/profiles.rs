use anyhow::Context as _;
use tracing::debug;
use uuid::Uuid;

use crate::database::Database;
use crate::model::profile::{Profile, ProfileUpdate};

/// Number of builders shown on the leaderboard.
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 100;

const PROFILE_COLUMNS: &str = "id, username, full_name, avatar_url, bio, website, \
     twitter_username, github_username, linkedin_url, total_score";

/// Profiles ordered by score, highest first. Ties keep database return order
/// and profiles without a score come last.
pub async fn list_leaderboard(db: &Database, limit: u32) -> anyhow::Result<Vec<Profile>> {
    let limit_i64 = i64::from(limit);

    let rows = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles \
         ORDER BY total_score DESC NULLS LAST \
         LIMIT $1"
    ))
    .bind(limit_i64)
    .fetch_all(db.pool())
    .await
    .context("failed to load leaderboard profiles")?;

    debug!(count = rows.len(), limit, "leaderboard loaded");
    Ok(rows)
}

pub async fn get_profile(db: &Database, id: Uuid) -> anyhow::Result<Option<Profile>> {
    let row = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db.pool())
    .await
    .context("failed to load profile by id")?;

    Ok(row)
}

pub async fn get_profile_by_username(
    db: &Database,
    username: &str,
) -> anyhow::Result<Option<Profile>> {
    let row = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(db.pool())
    .await
    .context("failed to load profile by username")?;

    Ok(row)
}

/// Overwrite all editable fields of the profile owned by `id`.
///
/// Returns `false` when no profile row matched. Database errors are returned
/// untouched so callers can show the server's message.
pub async fn update_profile(
    db: &Database,
    id: Uuid,
    update: &ProfileUpdate,
) -> Result<bool, sqlx::Error> {
    let updated = sqlx::query(
        "UPDATE profiles
         SET full_name = $2,
             username = $3,
             bio = $4,
             website = $5,
             twitter_username = $6,
             github_username = $7,
             linkedin_url = $8,
             updated_at = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(&update.full_name)
    .bind(&update.username)
    .bind(&update.bio)
    .bind(&update.website)
    .bind(&update.twitter_username)
    .bind(&update.github_username)
    .bind(&update.linkedin_url)
    .execute(db.pool())
    .await?
    .rows_affected();

    Ok(updated > 0)
}
