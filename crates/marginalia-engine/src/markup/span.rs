/// A byte range `[start, end)` into the scanned text.
///
/// Nodes store spans rather than copied text; slicing the source with any
/// span reproduces the exact original bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices the source text this span was produced from.
    ///
    /// All spans produced by the scanner begin and end at ASCII delimiter
    /// boundaries, so slicing never splits a UTF-8 sequence.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
