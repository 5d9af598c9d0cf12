//! Attribute lookups over a mark tag's attribute region.
//!
//! Each attribute's absence is independently representable: a span can have
//! a color and no note, a note and no tags, and so on. Lookups are regex
//! based and tolerant of attribute order and surrounding junk.

use std::sync::OnceLock;

use regex::Regex;

use crate::grammar::MarkTag;
use crate::records::ColorSpec;

fn note_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r#"{}="([^"]*)""#, MarkTag::NOTE_ATTR)).expect("invalid note regex")
    })
}

fn tags_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r#"{}="([^"]*)""#, MarkTag::TAGS_ATTR)).expect("invalid tags regex")
    })
}

fn style_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"background(?:-color)?:\s*(rgba?\([^)]+\)|#[A-Fa-f0-9]+|[A-Za-z]+)")
            .expect("invalid style color regex")
    })
}

fn class_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"{}="{}([a-z0-9-]+)""#,
            MarkTag::CLASS_ATTR,
            MarkTag::CLASS_PREFIX
        ))
        .expect("invalid class color regex")
    })
}

/// Looks up the raw (still entity-escaped) note value.
///
/// Returns `None` when the attribute is absent; an empty attribute value is
/// returned as `Some("")` and left for callers to treat as "no note".
pub fn note(attrs: &str) -> Option<&str> {
    note_regex()
        .captures(attrs)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Looks up the raw comma-joined tag tokens.
pub fn tags(attrs: &str) -> Option<&str> {
    tags_regex()
        .captures(attrs)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Looks up the span's color, trying the inline style form first and the
/// named class form second.
pub fn color(attrs: &str) -> Option<ColorSpec> {
    if let Some(c) = style_color_regex().captures(attrs)
        && let Some(m) = c.get(1)
    {
        return Some(ColorSpec::Value(m.as_str().to_string()));
    }
    class_color_regex()
        .captures(attrs)
        .and_then(|c| c.get(1))
        .map(|m| ColorSpec::Named(m.as_str().to_string()))
}

/// True when the span carries a non-empty note attribute.
pub fn has_note(attrs: &str) -> bool {
    note(attrs).is_some_and(|n| !n.is_empty())
}
