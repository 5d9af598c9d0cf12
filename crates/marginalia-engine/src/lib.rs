pub mod canonical;
pub mod encode;
pub mod erase;
pub mod extract;
pub mod grammar;
pub mod io;
pub mod markup;
pub mod records;
pub mod sync;


// Re-export key types for easier usage
pub use canonical::canonicalize;
pub use encode::{encode_highlight, normalize_tag};
pub use erase::erase_highlights;
pub use extract::extract_annotations;
pub use records::{AnnotationRecord, ColorSpec};
pub use sync::{HostBuffer, RecordSink, SyncController};
