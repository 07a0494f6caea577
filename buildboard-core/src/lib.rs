use buildboard_database::Database;
use buildboard_database::impls::profiles::DEFAULT_LEADERBOARD_LIMIT;

/// Header the upstream auth gateway uses to pass the signed-in user's id.
pub const DEFAULT_AUTH_USER_HEADER: &str = "x-user-id";

/// State shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub leaderboard_limit: u32,
    pub auth_user_header: String,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            auth_user_header: DEFAULT_AUTH_USER_HEADER.to_owned(),
        }
    }
}
