//! Summary section extraction from RFC documents.

/// Heading text that opens the summary section, compared case-insensitively.
const SUMMARY_HEADING: &str = "summary";

/// Heading text of a line, or `None` if the line is not a heading.
///
/// Only one leading `#` is removed, so `## Summary` reads as `# Summary`.
fn heading_text(line: &str) -> Option<&str> {
    line.trim().strip_prefix('#').map(str::trim)
}

/// Lines of the summary section, each with its original line terminator.
///
/// The section starts after a `# Summary` heading and ends at the next
/// heading or at end of input. Documents without the heading yield nothing.
pub fn summary_lines(text: &str) -> Vec<&str> {
    let mut in_summary = false;
    let mut lines = Vec::new();

    for line in text.split_inclusive('\n') {
        if let Some(heading) = heading_text(line) {
            if heading.to_lowercase() == SUMMARY_HEADING {
                in_summary = true;
                continue;
            }
            if in_summary {
                break;
            }
        }
        if in_summary {
            lines.push(line);
        }
    }

    lines
}

/// Reduce summary lines to their first sentence.
///
/// This is a plain search for the first `.`, so abbreviations cut the
/// sentence short.
pub fn first_sentence<S: AsRef<str>>(lines: &[S]) -> String {
    let text = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    match text.find('.') {
        Some(index) => text[..index].trim().trim_end_matches('.').to_string(),
        None => text.trim().to_string(),
    }
}

/// First sentence of a document's summary section, empty if it has none.
pub fn extract_summary(text: &str) -> String {
    first_sentence(&summary_lines(text))
}
