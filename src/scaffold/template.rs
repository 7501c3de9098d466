//! RFC template filling and index entries.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::Error;
use crate::scaffold::Category;

const START_DATE_FIELD: &str = "- Start Date: YYYY-MM-DD";
const CATEGORY_FIELD: &str = "- RFC Type: feature / decision / informational";
const PR_FIELD: &str = "- RFC PR: <link>";

/// Read the RFC template.
pub fn read_template(path: &Path) -> Result<String, Error> {
    if !path.exists() {
        return Err(Error::TemplateNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Fill the placeholder header fields of the template.
///
/// Fields missing from the template are left alone.
pub fn fill_template(template: &str, category: Category, pr_link: &str, date: NaiveDate) -> String {
    template
        .replace(
            START_DATE_FIELD,
            &format!("- Start Date: {}", date.format("%Y-%m-%d")),
        )
        .replace(CATEGORY_FIELD, &format!("- RFC Type: {}", category))
        .replace(PR_FIELD, &format!("- RFC PR: {}", pr_link))
}

/// Index line linking a new RFC.
pub fn index_entry(number: &str, slug: &str, file: &str, name: &str) -> String {
    format!("- [{}-{}]({}): {}", number, slug, file, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
- Start Date: YYYY-MM-DD
- RFC Type: feature / decision / informational
- RFC PR: <link>
- RFC Status: draft

# Summary

One paragraph explanation of the feature.
";

    #[test]
    fn test_fill_template() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let filled = fill_template(
            TEMPLATE,
            Category::Decision,
            "https://github.com/getsentry/rfcs/pull/42",
            date,
        );

        assert!(filled.starts_with(
            "- Start Date: 2024-03-07\n\
             - RFC Type: decision\n\
             - RFC PR: https://github.com/getsentry/rfcs/pull/42\n\
             - RFC Status: draft\n"
        ));
        assert!(filled.contains("# Summary\n\nOne paragraph"));
    }

    #[test]
    fn test_fill_template_without_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(fill_template("# Title\n", Category::Feature, "x", date), "# Title\n");
    }

    #[test]
    fn test_index_entry() {
        assert_eq!(
            index_entry("0042", "use-http-server", "text/0042-use-http-server.md", "Use HTTPServer"),
            "- [0042-use-http-server](text/0042-use-http-server.md): Use HTTPServer"
        );
    }

    #[test]
    fn test_missing_template() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = read_template(&temp.path().join("0000-template.md")).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound(_)));
    }
}
