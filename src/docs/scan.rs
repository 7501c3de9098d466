//! Content directory scanning.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::docs::summary::extract_summary;
use crate::error::Error;

/// Map every document in `dir` with the given extension to its summary.
///
/// Subdirectories and files with other extensions are ignored. A document
/// without a summary section maps to an empty string.
pub fn scan_documents(dir: &Path, extension: &str) -> Result<BTreeMap<String, String>, Error> {
    let suffix = format!(".{}", extension);
    let mut documents = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "Skipping file with non UTF-8 name");
            continue;
        };
        if !name.ends_with(&suffix) {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let summary = extract_summary(&content);
        debug!(file = %name, summary = %summary, "Scanned document");
        documents.insert(name, summary);
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_extension() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("0001-a.md"), "# Summary\nDoes A. Then B.\n").unwrap();
        fs::write(dir.join("0002-b.md"), "# Title\nNo summary here.\n").unwrap();
        fs::write(dir.join("notes.txt"), "# Summary\nIgnored.\n").unwrap();
        fs::create_dir(dir.join("assets.md")).unwrap();

        let documents = scan_documents(dir, "md").unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents["0001-a.md"], "Does A");
        assert_eq!(documents["0002-b.md"], "");
    }

    #[test]
    fn test_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        let err = scan_documents(&temp.path().join("text"), "md").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
