use crate::grammar::{Indicator, MarkTag};

use super::{cursor::Cursor, span::Span, types::MarkupNode};

/// Scans document text into a sequence of [`MarkupNode`]s.
///
/// Single pass, left to right. Text between highlight spans is emitted as
/// `Text` nodes; each well-formed span becomes one `Mark` node that also
/// captures the indicator run trailing its closing tag.
///
/// # Malformed input
///
/// An opening tag with no `>` or no matching `</mark>` is not a span; the
/// scanner falls back to treating it as plain text. Indicator elements with
/// no preceding span stay plain text as well.
pub fn scan_markup(s: &str) -> Vec<MarkupNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<MarkupNode>, start: usize, end: usize) {
        if end > start {
            out.push(MarkupNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_scan_mark(&mut cur) {
            flush_text(&mut out, text_start, node.full().start);
            text_start = node.full().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to scan a highlight span starting at the current position.
///
/// Returns `None` if not at `<mark`, or if the opening tag is unterminated,
/// or if no closing tag follows. On failure, cursor position is restored.
fn try_scan_mark(cur: &mut Cursor<'_>) -> Option<MarkupNode> {
    if !cur.starts_with(MarkTag::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(MarkTag::OPEN.len());

    // Reject longer tag names sharing the prefix (e.g. `<marker>`)
    match cur.peek() {
        Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') => {}
        _ => {
            *cur = saved;
            return None;
        }
    }

    let attrs_start = cur.pos();
    if !cur.seek_byte(MarkTag::OPEN_END) {
        // Unterminated opening tag, restore cursor
        *cur = saved;
        return None;
    }
    let attrs_end = cur.pos();
    cur.bump(); // >

    let inner_start = cur.pos();
    if !cur.seek(MarkTag::CLOSE) {
        // No closing tag, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(MarkTag::CLOSE.len());

    // Capture the indicator run immediately after the closing tag
    let mut indicators = vec![];
    while cur.starts_with(Indicator::ELEMENT) {
        let ind_start = cur.pos();
        cur.bump_n(Indicator::ELEMENT.len());
        indicators.push(Span {
            start: ind_start,
            end: cur.pos(),
        });
    }

    Some(MarkupNode::Mark {
        full: Span {
            start,
            end: cur.pos(),
        },
        attrs: Span {
            start: attrs_start,
            end: attrs_end,
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
        indicators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Indicator;

    fn mark_parts(node: &MarkupNode) -> (Span, Span, Span, usize) {
        match node {
            MarkupNode::Mark {
                full,
                attrs,
                inner,
                indicators,
            } => (*full, *attrs, *inner, indicators.len()),
            MarkupNode::Text(_) => panic!("expected Mark"),
        }
    }

    #[test]
    fn scan_plain_text() {
        let nodes = scan_markup("hello world");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(
            nodes[0],
            MarkupNode::Text(Span { start: 0, end: 11 })
        ));
    }

    #[test]
    fn scan_single_span() {
        let src = r#"<mark class="hltr-pink">hi</mark>"#;
        let nodes = scan_markup(src);
        assert_eq!(nodes.len(), 1);
        let (full, attrs, inner, inds) = mark_parts(&nodes[0]);
        assert_eq!(full.slice(src), src);
        assert_eq!(attrs.slice(src), r#" class="hltr-pink""#);
        assert_eq!(inner.slice(src), "hi");
        assert_eq!(inds, 0);
    }

    #[test]
    fn scan_span_with_surrounding_text() {
        let src = "before <mark style=\"background: red;\">x</mark> after";
        let nodes = scan_markup(src);
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[0], MarkupNode::Text(_)));
        assert!(matches!(nodes[1], MarkupNode::Mark { .. }));
        assert!(matches!(nodes[2], MarkupNode::Text(_)));
    }

    #[test]
    fn scan_captures_indicator_run() {
        let src = format!(
            "<mark class=\"hltr-pink\" data-note=\"n\">x</mark>{}{}",
            Indicator::ELEMENT,
            Indicator::ELEMENT
        );
        let nodes = scan_markup(&src);
        assert_eq!(nodes.len(), 1);
        let (full, _, _, inds) = mark_parts(&nodes[0]);
        assert_eq!(inds, 2);
        assert_eq!(full.end, src.len());
    }

    #[test]
    fn unterminated_open_tag_is_text() {
        let src = "<mark class=\"hltr-pink\">no close tag";
        let nodes = scan_markup(src);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], MarkupNode::Text(_)));
    }

    #[test]
    fn open_tag_without_gt_is_text() {
        let nodes = scan_markup("<mark class=\"unfinished");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], MarkupNode::Text(_)));
    }

    #[test]
    fn longer_tag_name_is_not_a_span() {
        let nodes = scan_markup("<marker>text</marker>");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], MarkupNode::Text(_)));
    }

    #[test]
    fn orphan_indicator_is_text() {
        let nodes = scan_markup(Indicator::ELEMENT);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], MarkupNode::Text(_)));
    }

    #[test]
    fn spans_reassemble_to_source() {
        let src = format!(
            "a <mark class=\"hltr-blue\">b</mark>{} c <mark style=\"background: rgb(1,2,3);\">d</mark>",
            Indicator::ELEMENT
        );
        let nodes = scan_markup(&src);
        let rebuilt: String = nodes.iter().map(|n| n.full().slice(&src)).collect();
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn multiple_spans_in_document_order() {
        let src = "<mark class=\"hltr-a\">1</mark> mid <mark class=\"hltr-b\">2</mark>";
        let marks: Vec<_> = scan_markup(src)
            .into_iter()
            .filter(|n| matches!(n, MarkupNode::Mark { .. }))
            .collect();
        assert_eq!(marks.len(), 2);
        assert!(marks[0].full().start < marks[1].full().start);
    }

    #[test]
    fn utf8_text_around_spans() {
        let src = "héllo <mark class=\"hltr-pink\">wörld</mark> ✓";
        let nodes = scan_markup(src);
        assert_eq!(nodes.len(), 3);
        let (_, _, inner, _) = mark_parts(&nodes[1]);
        assert_eq!(inner.slice(src), "wörld");
    }
}
