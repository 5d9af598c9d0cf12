/// The decorative note-indicator element.
///
/// Canonical form places exactly one of these immediately after the closing
/// tag of a span that carries a non-empty note, and none anywhere else.
pub struct Indicator;

impl Indicator {
    /// The full indicator element, emitted and matched verbatim.
    pub const ELEMENT: &'static str = r#"<span class="note-icon">:LiStickyNote:</span>"#;
}
