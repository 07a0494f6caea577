pub mod layout;
pub mod leaderboard;
pub mod messages;
pub mod profile;
pub mod settings;

/// Static description of a routable page.
pub struct PageMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
