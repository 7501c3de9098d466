//! Index and content document analysis.
//!
//! Finds RFC documents that exist on disk but are not linked from the
//! index document, and proposes index entries for them.

pub mod links;
pub mod report;
pub mod scan;
pub mod summary;

pub use links::{document_key, first_link_target, linked_keys, read_linked_keys};
pub use report::{find_unlinked, Drift, UnlinkedDocument};
pub use scan::scan_documents;
pub use summary::{extract_summary, first_sentence, summary_lines};
