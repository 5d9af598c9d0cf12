//! # Annotation Grammar
//!
//! Delimiter and attribute constants for the embedded highlight markup,
//! owned by the types they belong to:
//!
//! - **`MarkTag`**: the `<mark …>…</mark>` tag, its attributes, and the
//!   `hltr-` class prefix
//! - **`Indicator`**: the note-indicator element appended after a noted span
//! - **`Tag`**: the `#` marker and normalization rules for tag tokens
//!
//! All constants live here, not scattered in component code. The encoder,
//! eraser, extractor, and canonicalizer consume these constants; none of
//! them hardcode tag text. Changing the grammar means changing this module
//! and nothing else's literals.

pub mod indicator;
pub mod mark_tag;
pub mod tag;

pub use indicator::Indicator;
pub use mark_tag::MarkTag;
pub use tag::Tag;
