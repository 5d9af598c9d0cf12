/// Tag token vocabulary.
///
/// Tags are stored raw in `data-tags` (comma-joined, as typed) and only
/// normalized to marker-prefixed kebab form when rendered or extracted.
pub struct Tag;

impl Tag {
    /// Marker prefixed to every normalized tag.
    pub const MARKER: char = '#';
    /// Separator between raw tokens inside `data-tags`.
    pub const SEPARATOR: char = ',';
}
