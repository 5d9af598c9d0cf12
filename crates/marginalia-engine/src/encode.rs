//! Serializes a selection plus metadata into the embedded markup.

use crate::grammar::{Indicator, MarkTag, Tag};
use crate::records::ColorSpec;

/// Encodes a highlight span for insertion in place of the selection.
///
/// Produces opening tag + selected text + closing tag, followed by one
/// indicator element iff a non-empty note is attached. An empty note string
/// is treated as no note at all: no attribute, no indicator.
///
/// Tags are stored raw (trimmed, comma-joined); marker prefixing and kebab
/// normalization happen at extraction time, not here. Tags that trim to
/// nothing are dropped, and the attribute is omitted when none remain.
///
/// Insertion into the buffer and cursor repositioning are the caller's
/// responsibility.
pub fn encode_highlight(
    text: &str,
    color: &ColorSpec,
    note: Option<&str>,
    tags: &[String],
) -> String {
    let note = note.filter(|n| !n.is_empty());

    let mut out = String::from(MarkTag::OPEN);
    match color {
        ColorSpec::Named(name) => {
            out.push_str(&format!(
                r#" {}="{}""#,
                MarkTag::CLASS_ATTR,
                MarkTag::class_token(name)
            ));
        }
        ColorSpec::Value(value) => {
            out.push_str(&format!(
                r#" {}="{}""#,
                MarkTag::STYLE_ATTR,
                MarkTag::background(value)
            ));
        }
    }
    if let Some(n) = note {
        out.push_str(&format!(
            r#" {}="{}""#,
            MarkTag::NOTE_ATTR,
            // encode_safe also escapes `<` and `>`, so a note can never
            // smuggle a closing tag or indicator element into the document
            html_escape::encode_safe(n)
        ));
    }
    let kept: Vec<&str> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if !kept.is_empty() {
        out.push_str(&format!(
            r#" {}="{}""#,
            MarkTag::TAGS_ATTR,
            kept.join(&Tag::SEPARATOR.to_string())
        ));
    }
    out.push(MarkTag::OPEN_END as char);
    out.push_str(text);
    out.push_str(MarkTag::CLOSE);
    if note.is_some() {
        out.push_str(Indicator::ELEMENT);
    }
    out
}

/// Normalizes one raw tag token to its rendered form: trimmed, internal
/// whitespace collapsed to single hyphens, lowercased, marker-prefixed.
///
/// Returns `None` for tokens that normalize to nothing.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join("-");
    if collapsed.is_empty() {
        return None;
    }
    Some(format!("{}{}", Tag::MARKER, collapsed.to_lowercase()))
}
