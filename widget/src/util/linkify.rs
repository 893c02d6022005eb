//! Display normalization for message text.
//!
//! Workflow replies often carry links as HTML anchors or markdown. The panel
//! shows every link as its bare URL and makes raw `http(s)://` URLs
//! clickable, so text is first reduced to bare URLs ([`clean_links`]) and then
//! split into text and link runs ([`linkify`]).

#[cfg(test)]
#[path = "linkify_test.rs"]
mod linkify_test;

use std::sync::LazyLock;

use regex::Regex;

static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a href="([^"]+)"[^>]*>[^<]*</a>"#).expect("anchor tag regex"));
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("markdown link regex"));
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").expect("url regex"));

/// A run of rendered message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// A URL rendered as a link opening in a new tab.
    Link(String),
}

impl Segment {
    /// The characters this segment shows on screen.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Link(s) => s,
        }
    }
}

/// Replace anchor tags and markdown links with their target URLs.
///
/// Replacement repeats until nothing matches, so the result never contains
/// a link form that a second pass would rewrite.
#[must_use]
pub fn clean_links(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let without_anchors = ANCHOR_TAG.replace_all(&current, "$1");
        let cleaned = MARKDOWN_LINK.replace_all(&without_anchors, "$2").into_owned();
        if cleaned == current {
            return cleaned;
        }
        current = cleaned;
    }
}

/// Split cleaned `text` into text and link segments.
#[must_use]
pub fn linkify(text: &str) -> Vec<Segment> {
    let cleaned = clean_links(text);
    let mut segments = Vec::new();
    let mut last = 0;

    for url in BARE_URL.find_iter(&cleaned) {
        if url.start() > last {
            segments.push(Segment::Text(cleaned[last..url.start()].to_string()));
        }
        segments.push(Segment::Link(url.as_str().to_string()));
        last = url.end();
    }
    if last < cleaned.len() {
        segments.push(Segment::Text(cleaned[last..].to_string()));
    }

    segments
}

/// Concatenated on-screen text of `segments`.
#[must_use]
pub fn visible_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

/// Split message content into the paragraphs rendered as separate bubbles.
#[must_use]
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split("\n\n").collect()
}
