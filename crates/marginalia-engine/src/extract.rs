//! Extracts structured annotation records from document text.

use crate::encode::normalize_tag;
use crate::grammar::Tag;
use crate::markup::{MarkupNode, attrs, scan_markup};
use crate::records::AnnotationRecord;

/// Extracts every annotation span in `text` as an [`AnnotationRecord`], in
/// document order.
///
/// Computed eagerly in one pass. Each attribute is looked up independently:
/// a span can have a color and no note, a note and no tags, and so on. The
/// note value is entity-decoded; an empty `data-note` attribute reads as no
/// note. Tag tokens are normalized here (marker prefix, kebab case) and
/// tokens that normalize to nothing are dropped.
///
/// Malformed spans are skipped, and a span followed by several stale
/// indicator elements still yields exactly one record.
pub fn extract_annotations(text: &str) -> Vec<AnnotationRecord> {
    scan_markup(text)
        .into_iter()
        .filter_map(|node| match node {
            MarkupNode::Text(_) => None,
            MarkupNode::Mark { attrs, inner, .. } => {
                let attr_text = attrs.slice(text);
                Some(record_from_attrs(attr_text, inner.slice(text)))
            }
        })
        .collect()
}

fn record_from_attrs(attr_text: &str, inner: &str) -> AnnotationRecord {
    let note = attrs::note(attr_text)
        .filter(|n| !n.is_empty())
        .map(|n| html_escape::decode_html_entities(n).into_owned());
    let tags = attrs::tags(attr_text)
        .map(|raw| {
            raw.split(Tag::SEPARATOR)
                .filter_map(normalize_tag)
                .collect()
        })
        .unwrap_or_default();
    AnnotationRecord {
        text: inner.to_string(),
        note,
        color: attrs::color(attr_text),
        tags,
    }
}
