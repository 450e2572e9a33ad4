//! Poster URL selection for movie cards.

/// Path segment of the backend's generic genre images; those are replaced by
/// a titled placeholder.
pub const FALLBACK_POSTER_MARKER: &str = "/static/fallback/";
pub const DEFAULT_POSTER_COLOR: &str = "374151";
/// Title budget for placeholder text, in UTF-16 code units as browsers count
/// string length.
pub const PLACEHOLDER_TITLE_UNITS: usize = 20;

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes.
const URI_COMPONENT_UNRESERVED: &[(&str, &str)] = &[
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Background colour per genre keyword. Order matters: the first keyword
/// found in the genre string wins.
pub const GENRE_COLORS: &[(&str, &str)] = &[
    ("action", "8B0000"),
    ("drama", "2E4057"),
    ("comedy", "FFD700"),
    ("horror", "1a1a2e"),
    ("science fiction", "0a192f"),
    ("romance", "C71585"),
    ("adventure", "228B22"),
    ("thriller", "2C3539"),
    ("animation", "FF6B35"),
    ("fantasy", "6B5B95"),
];

pub fn genre_color(genres: Option<&str>) -> &'static str {
    let Some(genres) = genres else {
        return DEFAULT_POSTER_COLOR;
    };
    let genres = genres.to_lowercase();
    GENRE_COLORS
        .iter()
        .find(|(genre, _)| genres.contains(genre))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_POSTER_COLOR)
}

pub fn placeholder_poster_url(genres: Option<&str>, title: &str) -> String {
    format!(
        "https://via.placeholder.com/300x450/{}/ffffff?text={}",
        genre_color(genres),
        encode_uri_component(truncate_utf16(title, PLACEHOLDER_TITLE_UNITS))
    )
}

/// Longest prefix of `s` that fits in `max_units` UTF-16 code units. A
/// character that would straddle the limit is dropped whole.
fn truncate_utf16(s: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (i, c) in s.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &s[..i];
        }
    }
    s
}

/// Percent-encode with the same reserved set as `encodeURIComponent`.
fn encode_uri_component(s: &str) -> String {
    let mut encoded = urlencoding::encode(s).into_owned();
    for (escape, ch) in URI_COMPONENT_UNRESERVED {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, ch);
        }
    }
    encoded
}

/// Image shown when a poster fails to load.
pub fn default_poster_url() -> &'static str {
    "https://via.placeholder.com/300x450/374151/ffffff?text=No+Poster"
}

/// The poster to show: the backend's URL when it is a real poster,
/// otherwise a genre-coloured placeholder.
pub fn poster_for(poster_url: Option<&str>, genres: Option<&str>, title: &str) -> String {
    match poster_url {
        Some(url) if !url.is_empty() && !url.contains(FALLBACK_POSTER_MARKER) => url.to_owned(),
        _ => placeholder_poster_url(genres, title),
    }
}
