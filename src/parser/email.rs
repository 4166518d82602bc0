use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("email pattern is valid")
});

/// Find the first email address anywhere in the text.
///
/// Fallback for transcripts without a labeled email line.
pub fn find_email_anywhere(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_email_in_prose() {
        let text = "My name is Bob. My email is bob@builder.com. I work for Bob's Builders.";
        assert_eq!(find_email_anywhere(text), Some("bob@builder.com".to_string()));
    }

    #[test]
    fn test_find_email_first_wins() {
        let text = "write to a.b+tag@mail.example.org or c@d.io";
        assert_eq!(find_email_anywhere(text), Some("a.b+tag@mail.example.org".to_string()));
    }

    #[test]
    fn test_find_email_case_insensitive() {
        assert_eq!(find_email_anywhere("JANE@EXAMPLE.COM"), Some("JANE@EXAMPLE.COM".to_string()));
    }

    #[test]
    fn test_find_email_requires_tld() {
        assert_eq!(find_email_anywhere("user@localhost"), None);
        assert_eq!(find_email_anywhere("user@host.c"), None);
        assert_eq!(find_email_anywhere(""), None);
    }
}
