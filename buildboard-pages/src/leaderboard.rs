use buildboard_database::Profile;
use buildboard_utils::formatting::{display_name, format_score, medal, rank_label};
use buildboard_utils::html::escape;

use crate::PageMeta;
use crate::layout::{avatar, page_shell, profile_href};
use crate::messages::{
    EMPTY_LEADERBOARD_HINT, EMPTY_LEADERBOARD_TITLE, LEADERBOARD_HEADING, LEADERBOARD_TAGLINE,
    RANKINGS_HEADING, points_message, total_builders_message,
};

pub const META: PageMeta = PageMeta {
    path: "/leaderboard",
    title: "Leaderboard",
    description: "Top builders ranked by participation and achievements.",
};

pub const PODIUM_SIZE: usize = 3;

/// Podium places in the order they are laid out, left to right.
const PODIUM_LAYOUT: [usize; PODIUM_SIZE] = [2, 1, 3];

/// A ranked result set split into the podium and everyone else.
///
/// Input order is kept as-is: it already reflects the score ordering and
/// tie-breaking of the query that produced it.
#[derive(Clone, Debug, Default)]
pub struct Standings {
    pub podium: Vec<Profile>,
    pub rest: Vec<Profile>,
}

impl Standings {
    pub fn from_profiles(mut profiles: Vec<Profile>) -> Self {
        let rest = if profiles.len() > PODIUM_SIZE {
            profiles.split_off(PODIUM_SIZE)
        } else {
            Vec::new()
        };

        Self {
            podium: profiles,
            rest,
        }
    }

    pub fn total(&self) -> usize {
        self.podium.len() + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.podium.is_empty()
    }

    /// Profile at a 1-based podium place.
    pub fn place(&self, place: usize) -> Option<&Profile> {
        place.checked_sub(1).and_then(|idx| self.podium.get(idx))
    }

    /// Every profile paired with its 1-based position.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Profile)> {
        self.podium
            .iter()
            .chain(self.rest.iter())
            .enumerate()
            .map(|(idx, profile)| (idx + 1, profile))
    }
}

pub fn render(standings: &Standings) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<section class=\"leaderboard\">\n<header>\n<h1>{LEADERBOARD_HEADING}</h1>\n<p>{LEADERBOARD_TAGLINE}</p>\n</header>\n"
    ));

    if !standings.is_empty() {
        body.push_str(&render_podium(standings));
    }

    body.push_str(&format!(
        "<div class=\"rankings-header\"><h2>{RANKINGS_HEADING}</h2><span class=\"rankings-total\">{}</span></div>\n",
        total_builders_message(standings.total())
    ));

    body.push_str("<table class=\"rankings\">\n<thead><tr><th>#</th><th>Builder</th><th>Points</th></tr></thead>\n<tbody>\n");
    for (position, profile) in standings.ranked() {
        body.push_str(&render_row(position, profile));
    }
    body.push_str("</tbody>\n</table>\n");

    if standings.is_empty() {
        body.push_str(&format!(
            "<div class=\"empty-state\"><div>🏆</div><p>{EMPTY_LEADERBOARD_TITLE}</p><p>{EMPTY_LEADERBOARD_HINT}</p></div>\n"
        ));
    }

    body.push_str("</section>");
    page_shell(&META, &body)
}

fn render_podium(standings: &Standings) -> String {
    let mut out = String::from("<div class=\"podium\">\n");

    for place in PODIUM_LAYOUT {
        match standings.place(place) {
            Some(profile) => out.push_str(&render_podium_place(place, profile)),
            None => out.push_str("<div class=\"podium-slot podium-empty\"></div>\n"),
        }
    }

    out.push_str("</div>\n");
    out
}

fn render_podium_place(place: usize, profile: &Profile) -> String {
    let name = display_name(profile.full_name.as_deref(), &profile.username);
    let crown = if place == 1 {
        "<div class=\"crown\">🏆</div>"
    } else {
        ""
    };
    let avatar_size = if place == 3 { "lg" } else { "xl" };

    format!(
        "<a class=\"podium-slot podium-place podium-place-{place}\" href=\"{href}\">{crown}{avatar}<span class=\"name\">{name}</span><div class=\"step\"><span class=\"medal\">{medal}</span><span class=\"place\">{place}</span><span class=\"score\">{score}</span></div></a>\n",
        href = escape(&profile_href(&profile.username)),
        avatar = avatar(profile.avatar_url.as_deref(), name, avatar_size),
        name = escape(name),
        medal = medal(place).unwrap_or_default(),
        score = points_message(profile.score()),
    )
}

fn render_row(position: usize, profile: &Profile) -> String {
    let name = display_name(profile.full_name.as_deref(), &profile.username);
    let row_class = if position <= PODIUM_SIZE {
        "rank-row rank-row-podium"
    } else {
        "rank-row"
    };

    format!(
        "<tr class=\"{row_class}\"><td class=\"rank\">{rank}</td><td class=\"builder\"><a href=\"{href}\">{avatar}<span class=\"name\">{name}</span> <span class=\"handle\">@{handle}</span></a></td><td class=\"points\">{points}</td></tr>\n",
        rank = rank_label(position),
        href = escape(&profile_href(&profile.username)),
        avatar = avatar(profile.avatar_url.as_deref(), name, "sm"),
        name = escape(name),
        handle = escape(&profile.username),
        points = format_score(profile.score()),
    )
}
