//! Rewrites document text into canonical annotation form.

use crate::grammar::Indicator;
use crate::markup::{MarkupNode, attrs, scan_markup};

/// Returns `text` with every span's trailing indicator state corrected:
/// exactly one indicator element after each span with a non-empty note,
/// none after spans without one, regardless of how many existed before.
///
/// One scanner pass, expressed as a single rebuild rather than sequential
/// find-and-replace passes, so running it on its own output is a no-op
/// (idempotence is what terminates the host's change-notification loop).
/// Text outside annotation spans — including malformed spans and orphan
/// indicator elements — is reproduced byte for byte.
///
/// Pure function: the caller decides whether to write the result back, and
/// should do so only when it differs from the input.
pub fn canonicalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for node in scan_markup(text) {
        match node {
            MarkupNode::Text(sp) => out.push_str(sp.slice(text)),
            MarkupNode::Mark {
                full,
                attrs: attr_span,
                indicators,
                ..
            } => {
                // Body runs up to the first trailing indicator, if any
                let body_end = indicators.first().map_or(full.end, |ind| ind.start);
                out.push_str(&text[full.start..body_end]);
                if attrs::has_note(attr_span.slice(text)) {
                    out.push_str(Indicator::ELEMENT);
                }
            }
        }
    }
    out
}
