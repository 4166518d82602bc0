//! Text normalization primitives
//!
//! Small total functions shared by every parser:
//! - Line ending normalization (CRLF / CR → LF)
//! - Literal `\n` escape expansion for double-encoded transcripts
//! - Whitespace collapsing and title casing

use serde_json::Value;

/// Normalize line endings: CRLF → LF, CR → LF
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Expand the literal two-character escapes `\r\n` and `\n` into real line feeds.
///
/// Chat transcripts that went through one JSON encoding too many still carry
/// the backslash sequences instead of line breaks.
pub fn unescape_newlines(s: &str) -> String {
    s.replace("\\r\\n", "\n").replace("\\n", "\n")
}

/// Replace every run of whitespace with a single space and trim both ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character of each whitespace-separated token and
/// lowercase the rest.
///
/// # Example
/// ```
/// use cotizador::parser::title_case;
/// assert_eq!(title_case("jOSE  de la CRUZ"), "Jose De La Cruz");
/// ```
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render a JSON value as message text.
///
/// Strings pass through, `null` and `false` become empty, everything else is
/// compact JSON.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_newlines_variants() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines(""), "");
    }

    #[test]
    fn test_unescape_newlines() {
        assert_eq!(unescape_newlines("Name: A\\nEmail: b"), "Name: A\nEmail: b");
        assert_eq!(unescape_newlines("x\\r\\ny"), "x\ny");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Example \t  Corp \n"), "Example Corp");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("john"), "John");
        assert_eq!(title_case("de la cruz"), "De La Cruz");
        assert_eq!(title_case("MCDONALD"), "Mcdonald");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn test_title_case_non_ascii() {
        assert_eq!(title_case("ñUÑEZ álvarez"), "Ñuñez Álvarez");
    }

    #[test]
    fn test_to_display_string() {
        assert_eq!(to_display_string(&json!("hola")), "hola");
        assert_eq!(to_display_string(&Value::Null), "");
        assert_eq!(to_display_string(&json!(false)), "");
        assert_eq!(to_display_string(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(to_display_string(&json!(42)), "42");
    }
}
