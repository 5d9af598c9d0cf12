//! Strips highlight markup from a text fragment.

use std::sync::OnceLock;

use regex::Regex;

use crate::grammar::MarkTag;

fn open_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Only the two opening forms the encoder emits; other <mark> tags in
        // the document are not ours to remove.
        Regex::new(&format!(
            r#"{}\s+(?:{}|{})[^>]*>"#,
            regex::escape(MarkTag::OPEN),
            MarkTag::STYLE_ATTR,
            MarkTag::CLASS_ATTR
        ))
        .expect("invalid open tag regex")
    })
}

/// Removes every opening and closing highlight tag from `fragment`,
/// leaving the enclosed text (and any indicator elements) in place.
///
/// Indicator cleanup is deliberately left to the canonicalizer: the eraser
/// operates on a raw selection without full-document context. Fragments
/// with unmatched or missing tags are a no-op for the missing side.
pub fn erase_highlights(fragment: &str) -> String {
    let without_open = open_tag_regex().replace_all(fragment, "");
    without_open.replace(MarkTag::CLOSE, "")
}
