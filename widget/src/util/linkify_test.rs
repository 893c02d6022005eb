use super::*;
use proptest::prelude::*;

fn text(s: &str) -> Segment {
    Segment::Text(s.to_string())
}

fn link(s: &str) -> Segment {
    Segment::Link(s.to_string())
}

// =============================================================
// clean_links
// =============================================================

#[test]
fn anchor_tag_becomes_bare_url() {
    let input = r#"Visit <a href="https://ladaka.design" target="_blank">our studio</a> today"#;
    assert_eq!(clean_links(input), "Visit https://ladaka.design today");
}

#[test]
fn markdown_link_becomes_bare_url() {
    assert_eq!(clean_links("See [our work](https://ladaka.design/work)"), "See https://ladaka.design/work");
}

#[test]
fn nested_markdown_is_cleaned_to_fixpoint() {
    assert_eq!(clean_links("[x]([y](z))"), "z");
}

#[test]
fn anchor_inside_markdown_text_is_cleaned() {
    let input = r#"[<a href="https://a.test">a</a>](https://b.test)"#;
    assert_eq!(clean_links(input), "https://b.test");
}

#[test]
fn text_without_links_is_unchanged() {
    assert_eq!(clean_links("[not a link] (nope)"), "[not a link] (nope)");
}

// =============================================================
// linkify
// =============================================================

#[test]
fn linkify_splits_around_urls() {
    let segments = linkify("Book at https://cal.test/ladaka or http://x.test now");
    assert_eq!(
        segments,
        vec![text("Book at "), link("https://cal.test/ladaka"), text(" or "), link("http://x.test"), text(" now")]
    );
}

#[test]
fn linkify_url_only() {
    assert_eq!(linkify("https://ladaka.design"), vec![link("https://ladaka.design")]);
}

#[test]
fn linkify_url_runs_to_whitespace() {
    assert_eq!(linkify("see https://x.test/p."), vec![text("see "), link("https://x.test/p.")]);
}

#[test]
fn linkify_cleans_markup_first() {
    let segments = linkify(r#"<a href="https://a.test/x">here</a> and [there](https://b.test)"#);
    assert_eq!(segments, vec![link("https://a.test/x"), text(" and "), link("https://b.test")]);
}

#[test]
fn linkify_plain_text_is_single_segment() {
    assert_eq!(linkify("Hey there, I am LADAKA"), vec![text("Hey there, I am LADAKA")]);
}

#[test]
fn linkify_empty_is_empty() {
    assert!(linkify("").is_empty());
}

#[test]
fn linkify_keeps_non_http_schemes_as_text() {
    assert_eq!(linkify("mail mailto:hi@x.test"), vec![text("mail mailto:hi@x.test")]);
}

#[test]
fn linkify_is_idempotent() {
    let samples = [
        "",
        "plain",
        "https://a.test",
        "go to https://a.test/x?y=1 then [b](https://b.test)",
        r#"<a href="https://c.test" class="x">c</a>"#,
        "[x]([y](z))",
        "[[a](b)](c)",
        r#"<a href="[q](https://d.test)">t</a>"#,
        "line one\n\nhttps://e.test\ttabbed",
        "ünïcode https://f.test/ä done",
    ];
    for sample in samples {
        let once = linkify(sample);
        let twice = linkify(&visible_text(&once));
        assert_eq!(once, twice, "not idempotent for {sample:?}");
    }
}

/// Text built from link-shaped fragments, so nested and broken markup show
/// up far more often than in uniformly random strings.
fn link_heavy_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("[".to_string()),
        Just("]".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("<a href=\"".to_string()),
        Just("\">".to_string()),
        Just("</a>".to_string()),
        Just("https://".to_string()),
        Just("http://".to_string()),
        Just(" ".to_string()),
        Just("\n\n".to_string()),
        "[a-z.]{1,6}",
        "\\PC{0,4}",
    ];
    prop::collection::vec(fragment, 0..16).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn linkify_is_idempotent_for_any_text(text in "\\PC*") {
        let once = linkify(&text);
        prop_assert_eq!(linkify(&visible_text(&once)), once);
    }

    #[test]
    fn linkify_is_idempotent_for_link_heavy_text(text in link_heavy_text()) {
        let once = linkify(&text);
        prop_assert_eq!(linkify(&visible_text(&once)), once);
    }

    #[test]
    fn clean_links_is_stable(text in link_heavy_text()) {
        let cleaned = clean_links(&text);
        prop_assert_eq!(clean_links(&cleaned), cleaned);
    }
}

#[test]
fn visible_text_concatenates_segments() {
    let segments = vec![text("a "), link("https://b.test"), text(" c")];
    assert_eq!(visible_text(&segments), "a https://b.test c");
}

// =============================================================
// paragraphs
// =============================================================

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(paragraphs("one\n\ntwo\nstill two\n\nthree"), vec!["one", "two\nstill two", "three"]);
}

#[test]
fn paragraphs_single_block() {
    assert_eq!(paragraphs("just one"), vec!["just one"]);
}
