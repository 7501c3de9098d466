//! Unlinked document detection and reporting.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::config::Layout;
use crate::docs::links::read_linked_keys;
use crate::docs::scan::scan_documents;
use crate::error::Error;

/// A document present on disk but missing from the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlinkedDocument {
    pub key: String,
    pub summary: String,
    /// Proposed index line.
    pub entry: String,
}

/// Result of comparing the index against the content directory.
#[derive(Debug, Clone, Serialize)]
pub struct Drift {
    #[serde(skip)]
    pub index_label: String,

    /// Sorted ascending by key.
    pub unlinked: Vec<UnlinkedDocument>,
}

impl Drift {
    /// Compute the unlinked documents as `existing - linked`.
    pub fn compute(
        layout: &Layout,
        linked: &BTreeSet<String>,
        existing: &BTreeMap<String, String>,
    ) -> Self {
        let unlinked = existing
            .iter()
            .filter(|(key, _)| !linked.contains(*key))
            .map(|(key, summary)| UnlinkedDocument {
                key: key.clone(),
                summary: summary.clone(),
                entry: proposed_entry(layout, key, summary),
            })
            .collect();

        Self {
            index_label: layout.index_label(),
            unlinked,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.unlinked.is_empty()
    }

    /// Process exit code: 1 when unlinked documents were found.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }

    /// Write the human-readable report.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        if self.is_clean() {
            writeln!(out, "All files added to {}", self.index_label)?;
            return Ok(());
        }

        writeln!(out, "Files not linked in {}:", self.index_label)?;
        for doc in &self.unlinked {
            writeln!(out, " * {}", doc.key)?;
        }

        writeln!(out)?;
        writeln!(out, "Proposed additions to {}:", self.index_label)?;
        writeln!(out)?;
        for doc in &self.unlinked {
            writeln!(out, "{}", doc.entry)?;
        }
        Ok(())
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Index line proposed for an unlinked document.
fn proposed_entry(layout: &Layout, key: &str, summary: &str) -> String {
    let suffix = format!(".{}", layout.extension);
    let short = key.strip_suffix(&suffix).unwrap_or(key);
    format!("* [{}]({}): {}", short, layout.document_link(key), summary)
}

/// Read the index and content directory and compute the drift between them.
pub fn find_unlinked(layout: &Layout) -> Result<Drift, Error> {
    let linked = read_linked_keys(&layout.index, &layout.link_prefix())?;
    let existing = scan_documents(&layout.content_dir, &layout.extension)?;
    let drift = Drift::compute(layout, &linked, &existing);

    info!(
        linked = linked.len(),
        existing = existing.len(),
        unlinked = drift.unlinked.len(),
        "Compared index against content directory"
    );

    Ok(drift)
}
