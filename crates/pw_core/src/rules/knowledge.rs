// Trivia patterns: chemistry, geography, networking, chess, links, glyphs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::Probe;

static ELEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"He|Li|Be|Ne|Na|Mg|Al|Si|Cl|Ar|Ca|Fe|Ni|Cu|Zn|Ag|Au|Pb").expect("element pattern")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)[0-9]{2}").expect("year pattern"));

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})").expect("hex color pattern"));

static CONTINENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)africa|antarctica|asia|australia|europe|north america|south america")
        .expect("continent pattern")
});

static CHESS_MOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[KQRBN]?[a-h][1-8]").expect("chess pattern"));

static VIDEO_DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com|youtu\.be").expect("video domain pattern"));

static HTTP_STATUS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"100|101|200|201|204|301|302|304|400|401|403|404|500|502|503")
        .expect("status pattern")
});

// Word boundaries are ASCII-only, so accented or CJK letters next to an
// address or date do not hide it.
static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?-u:\b)((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?-u:\b)",
    )
    .expect("ipv4 pattern")
});

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])(?-u:\b)")
        .expect("date pattern")
});

const RICKROLL: &str = "youtu.be/dQw4w9WgXcQ";
const SECURE_SCHEME: &str = "https://";

/// U+1F3CB PERSON LIFTING WEIGHTS, with or without VS16.
pub const STRENGTH_GLYPH: char = '\u{1F3CB}';
pub const INFINITY_GLYPH: char = '\u{221E}';

/// Rule 12: case-sensitive symbols, distinct.
pub fn two_elements(p: &Probe<'_>) -> bool {
    distinct_matches(&ELEMENT_RE, p.candidate, false) >= 2
}

/// Rule 16
pub fn two_years(p: &Probe<'_>) -> bool {
    YEAR_RE.find_iter(p.candidate).count() >= 2
}

/// Rule 17
pub fn three_strength_emoji(p: &Probe<'_>) -> bool {
    p.candidate.chars().filter(|c| *c == STRENGTH_GLYPH).count() == 3
}

/// Rule 18: the link is present and never carries the `https://` prefix.
pub fn unclickable_rickroll(p: &Probe<'_>) -> bool {
    let s = p.candidate;
    let mut found = false;
    for (idx, _) in s.match_indices(RICKROLL) {
        if s[..idx].ends_with(SECURE_SCHEME) {
            return false;
        }
        found = true;
    }
    found
}

/// Rule 20
pub fn two_hex_colors(p: &Probe<'_>) -> bool {
    HEX_COLOR_RE.find_iter(p.candidate).count() >= 2
}

/// Rule 21: any case, distinct after lowercasing.
pub fn two_continents(p: &Probe<'_>) -> bool {
    distinct_matches(&CONTINENT_RE, p.candidate, true) >= 2
}

/// Rule 26
pub fn two_chess_moves(p: &Probe<'_>) -> bool {
    CHESS_MOVE_RE.find_iter(p.candidate).count() >= 2
}

/// Rule 28
pub fn two_video_links(p: &Probe<'_>) -> bool {
    VIDEO_DOMAIN_RE.find_iter(p.candidate).count() >= 2
}

/// Rule 29
pub fn two_infinities(p: &Probe<'_>) -> bool {
    p.candidate.chars().filter(|c| *c == INFINITY_GLYPH).count() == 2
}

/// Rule 39
pub fn http_status(p: &Probe<'_>) -> bool {
    HTTP_STATUS_RE.is_match(p.candidate)
}

/// Rule 43
pub fn ipv4_address(p: &Probe<'_>) -> bool {
    IPV4_RE.is_match(p.candidate)
}

/// Rule 45: range-checked only, no days-in-month validation.
pub fn iso_date(p: &Probe<'_>) -> bool {
    ISO_DATE_RE.is_match(p.candidate)
}

fn distinct_matches(re: &Regex, haystack: &str, fold_case: bool) -> usize {
    re.find_iter(haystack)
        .map(|m| if fold_case { m.as_str().to_lowercase() } else { m.as_str().to_string() })
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(f: fn(&Probe<'_>) -> bool, s: &str) -> bool {
        f(&Probe::new(s))
    }

    #[test]
    fn test_two_elements() {
        assert!(ok(two_elements, "HeLi"));
        assert!(!ok(two_elements, "HeHe"));
        assert!(!ok(two_elements, "heli"));
    }

    #[test]
    fn test_two_years() {
        assert!(ok(two_years, "1999 and 2024"));
        assert!(!ok(two_years, "1899 2024"));
    }

    #[test]
    fn test_three_strength_emoji() {
        let three = "\u{1F3CB}\u{FE0F}\u{1F3CB}\u{1F3CB}\u{FE0F}";
        assert!(ok(three_strength_emoji, three));
        assert!(!ok(three_strength_emoji, "\u{1F3CB}\u{1F3CB}"));
        assert!(!ok(three_strength_emoji, &"\u{1F3CB}".repeat(4)));
    }

    #[test]
    fn test_unclickable_rickroll() {
        assert!(ok(unclickable_rickroll, "youtu.be/dQw4w9WgXcQ"));
        assert!(ok(unclickable_rickroll, "http://youtu.be/dQw4w9WgXcQ"));
        assert!(!ok(unclickable_rickroll, "https://youtu.be/dQw4w9WgXcQ"));
        assert!(!ok(unclickable_rickroll, "youtu.be/dQw4w9WgXcQ https://youtu.be/dQw4w9WgXcQ"));
        assert!(!ok(unclickable_rickroll, "youtu.be/other"));
    }

    #[test]
    fn test_two_hex_colors() {
        assert!(ok(two_hex_colors, "#fff #123456"));
        assert!(!ok(two_hex_colors, "#ggg #12"));
    }

    #[test]
    fn test_two_continents() {
        assert!(ok(two_continents, "ASIA europe"));
        assert!(ok(two_continents, "North America, South America"));
        assert!(!ok(two_continents, "asia ASIA"));
    }

    #[test]
    fn test_two_chess_moves() {
        assert!(ok(two_chess_moves, "Nf3 e4"));
        assert!(!ok(two_chess_moves, "Nf3"));
        assert!(!ok(two_chess_moves, "z9 i0"));
    }

    #[test]
    fn test_two_video_links() {
        assert!(ok(two_video_links, "youtube.com youtu.be"));
        assert!(ok(two_video_links, "youtu.be youtu.be"));
        assert!(!ok(two_video_links, "youtube.com"));
    }

    #[test]
    fn test_two_infinities() {
        assert!(ok(two_infinities, "\u{221E}x\u{221E}"));
        assert!(!ok(two_infinities, "\u{221E}\u{221E}\u{221E}"));
    }

    #[test]
    fn test_http_status() {
        assert!(ok(http_status, "err404"));
        assert!(!ok(http_status, "418"));
    }

    #[test]
    fn test_ipv4_address() {
        assert!(ok(ipv4_address, "ip 192.168.0.1 here"));
        assert!(ok(ipv4_address, "255.255.255.255"));
        assert!(!ok(ipv4_address, "256.1.1.1"));
        assert!(!ok(ipv4_address, "1.2.3"));
    }

    #[test]
    fn test_ipv4_after_non_ascii_letter() {
        assert!(ok(ipv4_address, "caf\u{E9}192.168.0.1"));
        assert!(ok(ipv4_address, "\u{6771}\u{4EAC}10.0.0.1"));
        assert!(!ok(ipv4_address, "x192.168.0.1"));
    }

    #[test]
    fn test_iso_date() {
        assert!(ok(iso_date, "on 2024-02-31"));
        assert!(!ok(iso_date, "2024-13-01"));
        assert!(!ok(iso_date, "2024-00-10"));
        assert!(!ok(iso_date, "x2024-01-01"));
    }

    #[test]
    fn test_iso_date_after_non_ascii_letter() {
        assert!(ok(iso_date, "n\u{E9}2024-01-15"));
        assert!(ok(iso_date, "2024-01-15\u{E9}t\u{E9}"));
    }
}
