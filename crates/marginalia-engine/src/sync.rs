//! Bridges the pure annotation functions to a live, host-owned buffer.
//!
//! The hazard here is re-entrancy: writing canonical text back into the
//! buffer raises another change notification. Termination relies on
//! [`canonicalize`](crate::canonicalize) being idempotent plus the equality
//! gate below — the second notification finds nothing to rewrite and stops.
//! There is no reentrancy guard and no retry mechanism; the equality check
//! is the loop breaker.

use anyhow::Result;

use crate::canonical::canonicalize;
use crate::extract::extract_annotations;
use crate::records::AnnotationRecord;

/// The host's mutable text buffer, as seen by the engine.
///
/// The engine never owns the document: it reads a full-text snapshot and
/// proposes a full replacement. Cursor positions are byte offsets.
pub trait HostBuffer {
    fn text(&self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn cursor(&self) -> usize;
    fn set_cursor(&mut self, offset: usize);
}

/// One-way presentation sink receiving refreshed record lists.
///
/// Records are pushed on every notification, whether or not the text
/// changed: a view switch needs a fresh list even for identical content.
pub trait RecordSink {
    fn render(&mut self, records: &[AnnotationRecord]);
}

/// Orchestrates canonicalization and extraction against the host buffer.
///
/// Stateless between notifications; every cycle is request/response over a
/// fresh snapshot.
#[derive(Debug, Default)]
pub struct SyncController;

impl SyncController {
    pub fn new() -> Self {
        Self
    }

    /// Handles one content-change or view-change notification.
    ///
    /// Any host failure is logged and swallowed: no partial write is
    /// committed, and the next notification gets another chance.
    pub fn handle_notification(&self, host: &mut dyn HostBuffer, sink: &mut dyn RecordSink) {
        if let Err(err) = self.reconcile(host, sink) {
            log::warn!("annotation sync skipped: {err:#}");
        }
    }

    fn reconcile(&self, host: &mut dyn HostBuffer, sink: &mut dyn RecordSink) -> Result<()> {
        let text = host.text()?;
        let canonical = canonicalize(&text);

        if canonical != text {
            let cursor = host.cursor();
            host.set_text(&canonical)?;
            // Coordinate-based restore: the offset is kept, clamped to the
            // new length. If the rewrite shifted text ahead of the cursor
            // the position drifts — known limitation.
            host.set_cursor(cursor.min(canonical.len()));
        }

        // Pushed regardless of whether canonicalization changed anything
        sink.render(&extract_annotations(&canonical));
        Ok(())
    }
}
