// file: src/publisher/slug.rs
// description: title slugification and date-based post filenames
// reference: https://docs.rs/regex

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

const MAX_SLUG_CHARS: usize = 50;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^\w\s-]").expect("invalid slug regex");
}

/// Normalize a title into a filesystem/URL-safe slug: strip everything that
/// is not a word character, whitespace or hyphen, trim, lowercase, and turn
/// spaces into hyphens. Truncated to 50 characters.
pub fn slugify(title: &str) -> String {
    let stripped = NON_SLUG_CHARS.replace_all(title, "");
    let slug: String = stripped.trim().to_lowercase().replace(' ', "-");
    slug.chars().take(MAX_SLUG_CHARS).collect()
}

/// Filename for a post published on `date`. Deterministic given date and
/// title; two posts with the same title on the same day collide and the
/// second silently overwrites the first.
pub fn filename_for(title: &str, date: NaiveDate) -> String {
    format!("{}-{}.md", date.format("%Y-%m-%d"), slugify(title))
}
