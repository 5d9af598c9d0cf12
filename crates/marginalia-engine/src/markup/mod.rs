//! # Markup Scanning
//!
//! Cursor-based scanning of the embedded highlight grammar out of arbitrary
//! document text.
//!
//! ## Architecture
//!
//! One tokenizing pass produces [`MarkupNode`]s: plain text runs and `Mark`
//! nodes. A `Mark` node captures the opening tag's attribute region, the
//! highlighted text, and every indicator element immediately trailing the
//! closing tag, all as byte spans into the source string. The extractor and
//! canonicalizer are both built on this single scanner so the round-trip and
//! idempotence properties hold by construction rather than by parallel
//! string surgery.
//!
//! ## Malformed input
//!
//! Unterminated opening tags and unmatched closing tags degrade to plain
//! text; nothing is dropped or rearranged. Indicator elements not preceded
//! by a closing tag are plain text too — only the canonicalizer decides
//! what to do with a span's trailing run.
//!
//! ## Modules
//!
//! - **`span`**: byte range type shared by all nodes
//! - **`cursor`**: byte cursor with save/restore for failed parses
//! - **`types`**: the `MarkupNode` enum
//! - **`scanner`**: `scan_markup()` entry point
//! - **`attrs`**: regex attribute lookups over a tag's attribute region

pub mod attrs;
pub mod cursor;
pub mod scanner;
pub mod span;
pub mod types;

pub use scanner::scan_markup;
pub use span::Span;
pub use types::MarkupNode;
