// file: src/publisher/frontmatter.rs
// description: front matter rendering and field extraction for posts
// reference: https://docs.rs/regex

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_LINE: Regex =
        Regex::new(r#"(?m)^title:\s*["']?(.+?)["']?\s*$"#).expect("invalid title regex");
    static ref TAGS_LINE: Regex =
        Regex::new(r"(?m)^tags:\s*(\[.*\])\s*$").expect("invalid tags regex");
}

/// Render the full post document: a delimited front-matter block followed by
/// the body verbatim. Tags are serialized as a JSON array even though the
/// surrounding block is not JSON, matching what the site generator expects.
/// A blank description falls back to the title.
pub fn render(
    title: &str,
    content: &str,
    tags: &[String],
    description: &str,
    date: NaiveDate,
) -> String {
    let date_str = date.format("%Y-%m-%d");
    let description = if description.is_empty() {
        title
    } else {
        description
    };
    let tags_json = serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string());

    format!(
        "---\n\
         title: \"{title}\"\n\
         description: \"{description}\"\n\
         pubDate: {date_str}\n\
         updatedDate: {date_str}\n\
         tags: {tags_json}\n\
         ---\n\
         \n\
         {content}\n"
    )
}

/// Split a document into its front-matter block and the remaining body.
/// Returns `None` when the document carries no leading block.
pub fn split(content: &str) -> Option<(&str, &str)> {
    if !content.starts_with("---") {
        return None;
    }

    let mut parts = content.splitn(3, "---");
    parts.next()?;
    let block = parts.next()?;
    let body = parts.next()?;
    Some((block.trim(), body.trim()))
}

/// Pull the title out of a post by pattern-matching the front-matter
/// `title:` line. Quotes around the value are optional.
pub fn extract_title(content: &str) -> Option<String> {
    TITLE_LINE
        .captures(content)
        .map(|caps| caps[1].to_string())
}

/// Parse the `tags:` JSON array back out of a rendered document.
pub fn extract_tags(content: &str) -> Option<Vec<String>> {
    let caps = TAGS_LINE.captures(content)?;
    serde_json::from_str(&caps[1]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_render_layout() {
        let doc = render("Test Post!", "Hello", &["a".into(), "b".into()], "", date());

        assert!(doc.starts_with("---\n"));
        assert!(doc.contains("title: \"Test Post!\""));
        assert!(doc.contains("pubDate: 2024-01-01"));
        assert!(doc.contains("updatedDate: 2024-01-01"));
        assert!(doc.ends_with("\nHello\n"));
    }

    #[test]
    fn test_blank_description_falls_back_to_title() {
        let doc = render("Test Post!", "Hello", &[], "", date());
        assert!(doc.contains("description: \"Test Post!\""));

        let doc = render("Test Post!", "Hello", &[], "A summary", date());
        assert!(doc.contains("description: \"A summary\""));
    }

    #[test]
    fn test_tags_round_trip() {
        let tags = vec!["rust".to_string(), "mcp".to_string(), "博客".to_string()];
        let doc = render("T", "body", &tags, "", date());
        assert_eq!(extract_tags(&doc), Some(tags));
    }

    #[test]
    fn test_empty_tags_round_trip() {
        let doc = render("T", "body", &[], "", date());
        assert_eq!(extract_tags(&doc), Some(vec![]));
    }

    #[test]
    fn test_extract_title() {
        let doc = render("Hello World", "body", &[], "", date());
        assert_eq!(extract_title(&doc), Some("Hello World".to_string()));
    }

    #[test]
    fn test_extract_title_unquoted() {
        let content = "---\ntitle: Plain Title\n---\n\nbody";
        assert_eq!(extract_title(content), Some("Plain Title".to_string()));
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(extract_title("# Just a heading"), None);
    }

    #[test]
    fn test_split() {
        let doc = render("T", "the body", &[], "", date());
        let (block, body) = split(&doc).unwrap();
        assert!(block.contains("title:"));
        assert_eq!(body, "the body");
    }

    #[test]
    fn test_split_without_front_matter() {
        assert!(split("# Just a heading").is_none());
    }
}
