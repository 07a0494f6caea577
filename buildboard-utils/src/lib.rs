/// Shared formatting helpers (display names, scores, ranks).
pub mod formatting;
/// HTML escaping for user-provided text.
pub mod html;
/// Brand shown in page titles and the footer.
pub const SITE_NAME: &str = "League";
