//! Report RFCs missing from the index.

use std::io::Write;
use std::path::Path;

use crate::cli::Format;
use crate::config::Layout;
use crate::docs;
use crate::error::Error;

/// Run the find-unlinked command, returning the process exit code.
pub fn run(root: &Path, format: Format) -> Result<i32, Error> {
    let layout = Layout::load(root)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = report(&layout, format, &mut out)?;
    out.flush()?;
    Ok(code)
}

/// Write the report for `layout` and return the exit code.
pub fn report<W: Write>(layout: &Layout, format: Format, out: &mut W) -> Result<i32, Error> {
    let drift = docs::find_unlinked(layout)?;
    match format {
        Format::Text => drift.write_text(out)?,
        Format::Json => drift.write_json(out)?,
    }
    Ok(drift.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_exit_codes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "- [0001-foo](text/0001-foo.md)\n").unwrap();
        fs::create_dir(temp.path().join("text")).unwrap();
        fs::write(temp.path().join("text/0001-foo.md"), "# Summary\nFoo.\n").unwrap();
        let layout = Layout::load(temp.path()).unwrap();

        let mut out = Vec::new();
        assert_eq!(report(&layout, Format::Text, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "All files added to README\n");

        fs::write(
            temp.path().join("text/0002-bar.md"),
            "# Summary\nThis does a thing. More detail.\n",
        )
        .unwrap();

        let mut out = Vec::new();
        assert_eq!(report(&layout, Format::Text, &mut out).unwrap(), 1);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\n * 0002-bar.md\n"));
        assert!(output.contains("\n* [0002-bar](text/0002-bar.md): This does a thing\n"));
        assert!(!output.contains("0001-foo"));
    }

    #[test]
    fn test_report_custom_layout() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("rfcs.toml"),
            "[paths]\nindex = \"INDEX.md\"\ncontent_dir = \"rfcs\"\n",
        )
        .unwrap();
        fs::write(temp.path().join("INDEX.md"), "[a](text/0001-a.md)\n").unwrap();
        fs::create_dir(temp.path().join("rfcs")).unwrap();
        fs::write(temp.path().join("rfcs/0001-a.md"), "").unwrap();
        let layout = Layout::load(temp.path()).unwrap();

        let mut out = Vec::new();
        assert_eq!(report(&layout, Format::Json, &mut out).unwrap(), 1);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["unlinked"][0]["entry"], "* [0001-a](rfcs/0001-a.md): ");
    }
}
