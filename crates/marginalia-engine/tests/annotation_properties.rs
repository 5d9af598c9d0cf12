//! End-to-end properties of the annotation engine: round-trip fidelity,
//! canonicalization idempotence, and eraser inverse.

use marginalia_engine::{
    AnnotationRecord, ColorSpec, canonicalize, encode_highlight, erase_highlights,
    extract_annotations, normalize_tag,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const INDICATOR: &str = r#"<span class="note-icon">:LiStickyNote:</span>"#;

#[rstest]
#[case(ColorSpec::Named("yellow".into()), None, vec![])]
#[case(ColorSpec::Named("pink".into()), Some("remember this"), vec!["my tag"])]
#[case(ColorSpec::Value("#FFB8EBA6".into()), Some("a \"quoted\" note & more"), vec![])]
#[case(ColorSpec::Value("rgb(255, 184, 235)".into()), None, vec!["One", "Two Words"])]
fn encode_extract_roundtrip(
    #[case] color: ColorSpec,
    #[case] note: Option<&str>,
    #[case] tags: Vec<&str>,
) {
    let tags: Vec<String> = tags.into_iter().map(String::from).collect();
    let encoded = encode_highlight("highlighted text", &color, note, &tags);
    let records = extract_annotations(&encoded);

    let expected = AnnotationRecord {
        text: "highlighted text".to_string(),
        note: note.map(String::from),
        color: Some(color),
        tags: tags.iter().filter_map(|t| normalize_tag(t)).collect(),
    };
    assert_eq!(records, vec![expected]);
}

#[test]
fn encoder_output_survives_canonicalization() {
    let doc = [
        encode_highlight("a", &ColorSpec::Named("yellow".into()), Some("note"), &[]),
        " plain ".to_string(),
        encode_highlight("b", &ColorSpec::Value("red".into()), None, &[]),
    ]
    .concat();
    assert_eq!(canonicalize(&doc), doc);
}

#[rstest]
#[case("")]
#[case("plain text, no annotations at all")]
#[case("broken <mark class=\"hltr-pink\">unterminated")]
fn canonicalize_is_idempotent(#[case] doc: &str) {
    let once = canonicalize(doc);
    assert_eq!(canonicalize(&once), once);
}

#[test]
fn canonicalize_is_idempotent_on_messy_documents() {
    let doc = format!(
        "start <mark class=\"hltr-pink\" data-note=\"n\">one</mark>{} middle \
         <mark style=\"background: red;\">two</mark>{} end {INDICATOR}",
        INDICATOR.repeat(4),
        INDICATOR
    );
    let once = canonicalize(&doc);
    let twice = canonicalize(&once);
    assert_eq!(once, twice);
}

#[test]
fn indicator_count_is_exact_after_canonicalization() {
    let noted = r#"<mark class="hltr-a" data-note="yes">x</mark>"#;
    let unnoted = r#"<mark class="hltr-b">y</mark>"#;
    let doc = format!(
        "{noted} {unnoted}{} {noted}{}",
        INDICATOR.repeat(3),
        INDICATOR.repeat(2)
    );
    let canonical = canonicalize(&doc);
    assert_eq!(canonical, format!("{noted}{INDICATOR} {unnoted} {noted}{INDICATOR}"));
}

#[test]
fn eraser_inverts_plain_encoding() {
    let text = "some selected words";
    for color in [
        ColorSpec::Named("yellow".into()),
        ColorSpec::Value("#BBFABBA6".into()),
    ] {
        let encoded = encode_highlight(text, &color, None, &[]);
        assert_eq!(erase_highlights(&encoded), text);
    }
}

#[test]
fn extraction_preserves_document_order() {
    let doc = [
        encode_highlight("first", &ColorSpec::Named("a".into()), None, &[]),
        " ... ".to_string(),
        encode_highlight("second", &ColorSpec::Named("b".into()), Some("n"), &[]),
        " ... ".to_string(),
        encode_highlight("third", &ColorSpec::Named("c".into()), None, &[]),
    ]
    .concat();
    let texts: Vec<_> = extract_annotations(&doc)
        .into_iter()
        .map(|r| r.text)
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

// Scenario examples

#[test]
fn scenario_encode_with_empty_metadata() {
    let out = encode_highlight("hello", &ColorSpec::Named("yellow".into()), Some(""), &[]);
    assert_eq!(out, r#"<mark class="hltr-yellow">hello</mark>"#);
}

#[test]
fn scenario_encode_with_note_and_tag() {
    let out = encode_highlight(
        "hello",
        &ColorSpec::Named("yellow".into()),
        Some("remember this"),
        &["my tag".to_string()],
    );
    assert_eq!(
        out,
        format!(
            "<mark class=\"hltr-yellow\" data-note=\"remember this\" \
             data-tags=\"my tag\">hello</mark>{INDICATOR}"
        )
    );
}

#[test]
fn scenario_stale_indicator_after_note_removal() {
    // data-note was removed by a direct edit but the indicator remains
    let doc = format!("<mark class=\"hltr-pink\">x</mark>{INDICATOR}");
    assert_eq!(canonicalize(&doc), r#"<mark class="hltr-pink">x</mark>"#);
}

#[test]
fn scenario_mixed_document_extraction() {
    let doc = format!(
        "<mark class=\"hltr-a\" data-note=\"noted\">one</mark>{INDICATOR} and \
         <mark class=\"hltr-b\">two</mark>"
    );
    let records = extract_annotations(&doc);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].note.as_deref(), Some("noted"));
    assert_eq!(records[1].note, None);
}
