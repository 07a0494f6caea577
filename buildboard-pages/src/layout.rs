use buildboard_utils::SITE_NAME;
use buildboard_utils::formatting::avatar_initial;
use buildboard_utils::html::{encode_path_segment, escape};

use crate::PageMeta;

const FOOTER_LINKS: &[(&str, &str)] = &[("/hackathons", "Hackathons"), ("/leaderboard", "Leaderboard")];

/// Wrap a rendered body in the shared document shell.
pub fn page_shell(meta: &PageMeta, body: &str) -> String {
    shell(meta.title, Some(meta.description), body)
}

/// Document shell for pages whose title is only known at request time.
pub fn titled_shell(title: &str, body: &str) -> String {
    shell(title, None, body)
}

fn shell(title: &str, description: Option<&str>, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape(title),
        SITE_NAME
    ));
    if let Some(description) = description {
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape(description)
        ));
    }
    out.push_str("</head>\n<body>\n<main>\n");
    out.push_str(body);
    out.push_str("\n</main>\n");
    out.push_str(&footer());
    out.push_str("</body>\n</html>\n");
    out
}

fn footer() -> String {
    let links = FOOTER_LINKS
        .iter()
        .map(|(href, label)| format!("<a href=\"{href}\">{label}</a>"))
        .collect::<Vec<_>>()
        .join(" ");

    format!("<footer><span>© 2025 {SITE_NAME}</span> <nav>{links}</nav></footer>\n")
}

/// Link target for a builder's public profile.
pub fn profile_href(username: &str) -> String {
    format!("/profile/{}", encode_path_segment(username))
}

/// Avatar image, or an initial when the builder has no image.
pub fn avatar(src: Option<&str>, fallback: &str, size: &str) -> String {
    match src.map(str::trim).filter(|src| !src.is_empty()) {
        Some(src) => format!(
            "<img class=\"avatar avatar-{size}\" src=\"{}\" alt=\"{}\">",
            escape(src),
            escape(fallback)
        ),
        None => format!(
            "<span class=\"avatar avatar-{size}\">{}</span>",
            escape(&avatar_initial(fallback))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{avatar, page_shell, profile_href, titled_shell};
    use crate::PageMeta;

    const META: PageMeta = PageMeta {
        path: "/x",
        title: "Leaderboard",
        description: "Top builders",
    };

    #[test]
    fn shell_sets_title_and_footer() {
        let html = page_shell(&META, "<p>body</p>");
        assert!(html.contains("<title>Leaderboard | League</title>"));
        assert!(html.contains("content=\"Top builders\""));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("© 2025 League"));
        assert!(html.contains("<a href=\"/hackathons\">Hackathons</a>"));
        assert!(html.contains("<a href=\"/leaderboard\">Leaderboard</a>"));
    }

    #[test]
    fn runtime_titles_are_escaped() {
        let html = titled_shell("<b>ada</b>", "");
        assert!(html.contains("<title>&lt;b&gt;ada&lt;/b&gt; | League</title>"));
    }

    #[test]
    fn avatar_falls_back_to_initial() {
        assert_eq!(
            avatar(None, "ada", "sm"),
            "<span class=\"avatar avatar-sm\">A</span>"
        );
        assert_eq!(
            avatar(Some("  "), "bob", "xl"),
            "<span class=\"avatar avatar-xl\">B</span>"
        );
        assert!(avatar(Some("https://img/a.png"), "ada", "sm").contains("src=\"https://img/a.png\""));
    }

    #[test]
    fn profile_links_encode_usernames() {
        assert_eq!(profile_href("ada"), "/profile/ada");
        assert_eq!(profile_href("a/b"), "/profile/a%2Fb");
    }
}
