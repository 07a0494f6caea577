pub const LEADERBOARD_HEADING: &str = "Leaderboard";
pub const LEADERBOARD_TAGLINE: &str = "Compete with fellow builders and climb the ranks";
pub const RANKINGS_HEADING: &str = "All Builders";
pub const EMPTY_LEADERBOARD_TITLE: &str = "No builders yet";
pub const EMPTY_LEADERBOARD_HINT: &str = "Join hackathons to climb the leaderboard!";

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";

pub const NOT_FOUND_TITLE: &str = "Not found";
pub const INTERNAL_ERROR: &str = "Something went wrong while loading this page.";

pub fn total_builders_message(total: usize) -> String {
    format!("{total} total")
}

pub fn points_message(score: i64) -> String {
    format!("{score} pts")
}

pub fn missing_profile_message(username: &str) -> String {
    format!("No builder named @{username} exists.")
}
