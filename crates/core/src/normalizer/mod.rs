//! Filename normalization - turns a release-group file name into a title
//! search query.
//!
//! The cleanup is an ordered sequence of strip passes; each one operates on
//! the output of the previous pass. The order matters: resolution markers
//! must go before the year truncation so a `1080p` run is never mistaken
//! for a release year.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Canonical form: `<title> (<4-digit year>)`, anchored at the end.
static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*\([0-9]{4}\)$").expect("canonical pattern compiles"));

/// Bracketed release tags, greedy from the first `[` to the last `]`.
static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*\]").expect("bracket pattern compiles"));

/// Everything from a language/source marker onward.
static MULTI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)multi.*").expect("multi pattern compiles"));
static VOSTFR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)vostfr.*").expect("vostfr pattern compiles"));
static AVI: Lazy<Regex> = Lazy::new(|| Regex::new(r"avi.*").expect("avi pattern compiles"));
static MKV: Lazy<Regex> = Lazy::new(|| Regex::new(r"mkv.*").expect("mkv pattern compiles"));
static WWW: Lazy<Regex> = Lazy::new(|| Regex::new(r"www.*").expect("www pattern compiles"));
static HD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)hd.*").expect("hd pattern compiles"));

/// Resolution marker: three or four digits immediately followed by `p`.
static RESOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{3}[0-9]?p.*").expect("resolution pattern compiles"));

/// A 4-digit year, optionally parenthesized.
static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?[0-9]{4}\)?").expect("year pattern compiles"));

/// Whether a filename stem is already in canonical `Title (Year)` form.
pub fn is_canonical(stem: &str) -> bool {
    CANONICAL.is_match(stem)
}

/// Normalize a filename stem into a title search query.
///
/// The caller is expected to have stripped the extension and to skip this
/// entirely for stems that already pass [`is_canonical`], unless the run
/// reprocesses everything.
pub fn normalize(stem: &str) -> String {
    let mut name = BRACKETED.replace_all(stem, "").into_owned();
    name = MULTI.replace(&name, "").into_owned();
    name = VOSTFR.replace(&name, "").into_owned();
    name = AVI.replace(&name, "").into_owned();
    name = MKV.replace(&name, "").into_owned();
    name = WWW.replace(&name, "").into_owned();
    name = HD.replace(&name, "").into_owned();
    name = RESOLUTION.replace(&name, "").into_owned();

    name = name.replace('.', " ");
    name = truncate_at_year(&name);

    name.trim().to_string()
}

/// Truncate a cleaned-up name at its release year, if one is present.
///
/// When the character immediately following the 4-digit match is `p` the
/// digits are a resolution marker, not a year, and the cut lands just
/// before the match instead. Only a literal `p` reclassifies the match.
fn truncate_at_year(name: &str) -> String {
    let Some(m) = YEAR.find(name) else {
        return name.to_string();
    };

    if name[m.end()..].starts_with('p') {
        // Resolution, not a year - drop the match and the separator
        // before it.
        let cut = name[..m.start()]
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        name[..cut].to_string()
    } else {
        name[..m.end()].to_string()
    }
}
