/// The embedded highlight tag and its attribute vocabulary.
///
/// A span looks like one of:
///
/// ```text
/// <mark style="background: #FFB8EBA6;" data-note="…" data-tags="a,b">text</mark>
/// <mark class="hltr-pink" data-note="…">text</mark>
/// ```
///
/// Exactly one of `style`/`class` carries the color; `data-note` and
/// `data-tags` are optional, and attribute absence is the only encoding of
/// "no note" / "no tags".
pub struct MarkTag;

impl MarkTag {
    /// Opening tag prefix (up to, not including, the attribute list).
    pub const OPEN: &'static str = "<mark";
    /// Byte that terminates the opening tag.
    pub const OPEN_END: u8 = b'>';
    /// The fixed closing tag.
    pub const CLOSE: &'static str = "</mark>";

    /// Attribute carrying an inline `background:` color.
    pub const STYLE_ATTR: &'static str = "style";
    /// Attribute carrying a named palette class.
    pub const CLASS_ATTR: &'static str = "class";
    /// Optional attribute carrying the escaped note text.
    pub const NOTE_ATTR: &'static str = "data-note";
    /// Optional attribute carrying comma-joined raw tag tokens.
    pub const TAGS_ATTR: &'static str = "data-tags";

    /// Prefix of named-color class tokens, e.g. `hltr-pink`.
    pub const CLASS_PREFIX: &'static str = "hltr-";

    /// Renders the `style` attribute value for a raw CSS color.
    pub fn background(color: &str) -> String {
        format!("background: {color};")
    }

    /// Renders the `class` attribute value for a named palette color.
    pub fn class_token(name: &str) -> String {
        format!("{}{}", Self::CLASS_PREFIX, name.to_lowercase())
    }
}
