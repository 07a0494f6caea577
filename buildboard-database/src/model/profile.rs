use sqlx::FromRow;
use uuid::Uuid;

/// A builder's stored account/display record.
#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub twitter_username: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
    pub total_score: Option<i64>,
}

impl Profile {
    /// Score used for ranking and display; a missing score counts as zero.
    pub fn score(&self) -> i64 {
        self.total_score.unwrap_or(0)
    }
}

/// The fields a user may edit from the settings form. Written verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub username: String,
    pub bio: String,
    pub website: String,
    pub twitter_username: String,
    pub github_username: String,
    pub linkedin_url: String,
}
