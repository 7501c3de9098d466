//! Kebab-case slugs for RFC file and branch names.

/// Turn an RFC title into a kebab-case slug.
///
/// ASCII punctuation is dropped, words are split on whitespace and on case
/// changes, and everything is lower-cased.
pub fn slugify(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !c.is_ascii_punctuation()).collect();

    let mut words = Vec::new();
    for chunk in cleaned.split_whitespace() {
        split_words(chunk, &mut words);
    }
    words.join("-")
}

fn split_words(chunk: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && !current.is_empty() && is_boundary(chars[i - 1], c, chars.get(i + 1).copied())
        {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
}

/// Whether a new word starts at `c`.
fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if c.is_uppercase() {
        // "camelCase", "v2Api", and the last capital of "HTTPServer"
        prev.is_lowercase()
            || prev.is_numeric()
            || (prev.is_uppercase() && next.is_some_and(char::is_lowercase))
    } else if c.is_numeric() {
        prev.is_uppercase()
    } else if c.is_alphabetic() {
        prev.is_numeric()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("snake_case and-dashes"), "snakecase-anddashes");
    }

    #[test]
    fn test_case_changes() {
        assert_eq!(slugify("camelCaseName"), "camel-case-name");
        assert_eq!(slugify("Use HTTPServer"), "use-http-server");
        assert_eq!(slugify("Sentry SDK"), "sentry-sdk");
        assert_eq!(slugify("Deprecate RFCs"), "deprecate-rf-cs");
    }

    #[test]
    fn test_digits() {
        assert_eq!(slugify("Python 3 support"), "python-3-support");
        assert_eq!(slugify("2FA rollout"), "2-fa-rollout");
        assert_eq!(slugify("sha256 digests"), "sha256-digests");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
