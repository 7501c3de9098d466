//! Markdown link extraction from the index document.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::Error;

/// `[label](target)`, capturing the target.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\(([^)]*)\)").unwrap());

/// Return the target of the first markdown link on a line.
///
/// Later links on the same line are ignored.
pub fn first_link_target(line: &str) -> Option<&str> {
    LINK_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip `prefix` from a link target to get a document key.
///
/// Targets outside the content directory (external URLs, other files, empty
/// targets) yield `None`.
pub fn document_key<'a>(target: &'a str, prefix: &str) -> Option<&'a str> {
    target.strip_prefix(prefix)
}

/// Collect the document keys linked from index text.
pub fn linked_keys(index: &str, prefix: &str) -> BTreeSet<String> {
    index
        .lines()
        .filter_map(first_link_target)
        .filter_map(|target| document_key(target, prefix))
        .map(str::to_string)
        .collect()
}

/// Read the index document and collect its linked document keys.
pub fn read_linked_keys(path: &Path, prefix: &str) -> Result<BTreeSet<String>, Error> {
    let content = std::fs::read_to_string(path)?;
    let keys = linked_keys(&content, prefix);
    debug!(path = %path.display(), count = keys.len(), "Read index links");
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_link_only() {
        let line = "* [a](text/0001-a.md) and [b](text/0002-b.md)";
        assert_eq!(first_link_target(line), Some("text/0001-a.md"));
    }

    #[test]
    fn test_no_link() {
        assert_eq!(first_link_target("# RFCs"), None);
        assert_eq!(first_link_target("[dangling] (text/x.md)"), None);
    }

    #[test]
    fn test_empty_target() {
        assert_eq!(first_link_target("[empty]()"), Some(""));
        assert_eq!(document_key("", "text/"), None);
    }

    #[test]
    fn test_prefix_filter() {
        let index = "\
- [0001-a](text/0001-a.md): First
- [ext](https://example.com/text/0002-b.md)
- [other](0003-c.md)
";
        let keys = linked_keys(index, "text/");
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("0001-a.md"));
        assert!(!keys.contains("0002-b.md"));
        assert!(!keys.contains("0003-c.md"));
    }

    #[test]
    fn test_second_link_on_line_not_recorded() {
        let index = "[home](https://example.com) [0004-d](text/0004-d.md)\n";
        assert!(linked_keys(index, "text/").is_empty());
    }

    #[test]
    fn test_read_missing_index() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_linked_keys(&dir.path().join("README.md"), "text/").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
