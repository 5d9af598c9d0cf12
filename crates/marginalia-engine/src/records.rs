use serde::Serialize;

/// How a highlight's color is encoded in the opening tag.
///
/// Exactly one of the two forms appears per span, chosen by the palette's
/// encoding method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ColorSpec {
    /// A named palette entry, rendered as a `hltr-<name>` class token.
    Named(String),
    /// A raw CSS color, rendered as an inline `background:` style.
    Value(String),
}

/// Read-only projection of one annotation span, for presentation.
///
/// Created fresh on every extraction pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    /// The highlighted text.
    pub text: String,
    /// Note text with entities decoded; `None` when the span has no note.
    pub note: Option<String>,
    /// The span's color, when one could be recognized.
    pub color: Option<ColorSpec>,
    /// Normalized tags (`#`-prefixed, kebab-cased), possibly empty.
    pub tags: Vec<String>,
}
