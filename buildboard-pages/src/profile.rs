use buildboard_database::Profile;
use buildboard_utils::formatting::{display_name, format_score};
use buildboard_utils::html::{encode_path_segment, escape};

use crate::PageMeta;
use crate::layout::{avatar, titled_shell};
use crate::messages::{NOT_FOUND_TITLE, missing_profile_message};

pub const META: PageMeta = PageMeta {
    path: "/profile/{username}",
    title: "Profile",
    description: "A builder's public profile.",
};

pub fn render(profile: &Profile) -> String {
    let name = display_name(profile.full_name.as_deref(), &profile.username);

    let mut body = String::from("<section class=\"profile\">\n");
    body.push_str(&avatar(profile.avatar_url.as_deref(), name, "xl"));
    body.push_str(&format!(
        "\n<h1>{}</h1>\n<p class=\"handle\">@{}</p>\n<p class=\"score\">{} pts</p>\n",
        escape(name),
        escape(&profile.username),
        format_score(profile.score())
    ));

    if let Some(bio) = present(&profile.bio) {
        body.push_str(&format!("<p class=\"bio\">{}</p>\n", escape(bio)));
    }

    let links = social_links(profile);
    if !links.is_empty() {
        body.push_str("<ul class=\"links\">\n");
        for (label, href) in links {
            body.push_str(&format!(
                "<li><a href=\"{}\" rel=\"nofollow noopener\">{}</a></li>\n",
                escape(&href),
                label
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("</section>");
    titled_shell(name, &body)
}

pub fn render_not_found(username: &str) -> String {
    let body = format!(
        "<section class=\"not-found\">\n<h1>Profile not found</h1>\n<p>{}</p>\n<a href=\"/leaderboard\">Back to the leaderboard</a>\n</section>",
        escape(&missing_profile_message(username))
    );
    titled_shell(NOT_FOUND_TITLE, &body)
}

/// Outbound links, in display order. Handles are turned into full URLs.
pub fn social_links(profile: &Profile) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();

    if let Some(website) = present(&profile.website).filter(|url| is_http_url(url)) {
        links.push(("Website", website.to_owned()));
    }
    if let Some(handle) = present(&profile.twitter_username) {
        links.push((
            "Twitter",
            format!(
                "https://twitter.com/{}",
                encode_path_segment(handle.trim_start_matches('@'))
            ),
        ));
    }
    if let Some(handle) = present(&profile.github_username) {
        links.push((
            "GitHub",
            format!("https://github.com/{}", encode_path_segment(handle)),
        ));
    }
    if let Some(url) = present(&profile.linkedin_url).filter(|url| is_http_url(url)) {
        links.push(("LinkedIn", url.to_owned()));
    }

    links
}

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{render, render_not_found, social_links};
    use crate::fixtures::profile;

    #[test]
    fn renders_profile_details() {
        let mut stored = profile("ada", Some(12_500));
        stored.full_name = Some("Ada Lovelace".to_owned());
        stored.bio = Some("Analytical engines & more".to_owned());

        let html = render(&stored);
        assert!(html.contains("<title>Ada Lovelace | League</title>"));
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("<p class=\"handle\">@ada</p>"));
        assert!(html.contains("<p class=\"score\">12,500 pts</p>"));
        assert!(html.contains("Analytical engines &amp; more"));
        assert!(!html.contains("class=\"links\""));
    }

    #[test]
    fn builds_social_links_from_handles() {
        let mut stored = profile("ada", None);
        stored.website = Some("https://ada.dev".to_owned());
        stored.twitter_username = Some("@ada".to_owned());
        stored.github_username = Some("ada-l".to_owned());
        stored.linkedin_url = Some("   ".to_owned());

        let links = social_links(&stored);
        assert_eq!(
            links,
            vec![
                ("Website", "https://ada.dev".to_owned()),
                ("Twitter", "https://twitter.com/ada".to_owned()),
                ("GitHub", "https://github.com/ada-l".to_owned()),
            ]
        );
    }

    #[test]
    fn skips_non_http_urls() {
        let mut stored = profile("ada", None);
        stored.website = Some("javascript:alert(1)".to_owned());
        stored.linkedin_url = Some("HTTPS://linkedin.com/in/ada".to_owned());

        let links = social_links(&stored);
        assert_eq!(
            links,
            vec![("LinkedIn", "HTTPS://linkedin.com/in/ada".to_owned())]
        );
    }

    #[test]
    fn not_found_page_escapes_username() {
        let html = render_not_found("<ghost>");
        assert!(html.contains("No builder named @&lt;ghost&gt; exists."));
        assert!(html.contains("<title>Not found | League</title>"));
    }
}
