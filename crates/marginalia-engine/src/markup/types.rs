use super::span::Span;

/// A scanned markup node with byte spans into the source text.
///
/// All variants store spans rather than text, so concatenating the `full`
/// spans of every node in order reproduces the source exactly.
#[derive(Debug, Clone)]
pub enum MarkupNode {
    /// Plain text outside any highlight span.
    Text(Span),
    /// A highlight span, plus the indicator run trailing its closing tag.
    Mark {
        /// Full span: opening tag through closing tag and any trailing
        /// indicator elements.
        full: Span,
        /// Attribute region inside the opening tag (after `<mark`, before `>`).
        attrs: Span,
        /// Highlighted text between the opening and closing tags.
        inner: Span,
        /// Each indicator element immediately following the closing tag, in
        /// order. Canonical form allows at most one.
        indicators: Vec<Span>,
    },
}

impl MarkupNode {
    /// The full span of this node.
    pub fn full(&self) -> Span {
        match self {
            MarkupNode::Text(sp) => *sp,
            MarkupNode::Mark { full, .. } => *full,
        }
    }
}
