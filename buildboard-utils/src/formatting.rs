/// Name shown for a builder: the full name when non-empty, otherwise the username.
///
/// A whitespace-only full name is kept as-is.
pub fn display_name<'a>(full_name: Option<&'a str>, username: &'a str) -> &'a str {
    match full_name {
        Some(name) if !name.is_empty() => name,
        _ => username,
    }
}

/// Single uppercase letter used when a builder has no avatar image.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

/// Format a score with thousands separators (e.g. 1234567 -> "1,234,567").
pub fn format_score(score: i64) -> String {
    let digits = score.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if score < 0 {
        out.push('-');
    }

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Medal for a podium place (1-based). Places past third have none.
pub fn medal(place: usize) -> Option<&'static str> {
    match place {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

/// Label shown in the rank column: a medal for the podium, the number otherwise.
pub fn rank_label(place: usize) -> String {
    medal(place)
        .map(str::to_owned)
        .unwrap_or_else(|| place.to_string())
}
