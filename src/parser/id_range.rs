//! Task reference expansion
//!
//! Expands compact notations such as `T1-3`, `R5–7`, `T1/T22` or a bare
//! `12` into explicit identifiers.

use std::collections::HashSet;

/// Prefix applied to tokens written without letters
pub const DEFAULT_PREFIX: &str = "T";

/// Widest range a single token may expand to; wider tokens are dropped
pub const MAX_RANGE_SPAN: u64 = 10_000;

/// A single parsed reference token
#[derive(Debug, Clone, PartialEq, Eq)]
struct IdToken<'a> {
    prefix: &'a str,
    start: u64,
    end: u64,
}

fn is_separator(c: char) -> bool {
    c == ',' || c == '/' || c.is_whitespace()
}

/// Parse `(letters)?(digits)([-–](digits))?`, the whole token or nothing
fn parse_token(token: &str) -> Option<IdToken<'_>> {
    let letters = token.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(token.len());
    let (prefix, rest) = token.split_at(letters);

    let (first, rest) = split_digits(rest)?;
    let second = if rest.is_empty() {
        first
    } else {
        let rest = rest.strip_prefix('-').or_else(|| rest.strip_prefix('–'))?;
        match split_digits(rest)? {
            (n, "") => n,
            _ => return None,
        }
    };

    let (start, end) = (first.min(second), first.max(second));
    if end - start >= MAX_RANGE_SPAN {
        tracing::debug!(token, span = end - start + 1, "range exceeds MAX_RANGE_SPAN, dropping");
        return None;
    }

    Some(IdToken {
        prefix: if prefix.is_empty() { DEFAULT_PREFIX } else { prefix },
        start,
        end,
    })
}

/// Leading ASCII digits as a number, plus the remainder
fn split_digits(s: &str) -> Option<(u64, &str)> {
    let len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if len == 0 {
        return None;
    }
    let (digits, rest) = s.split_at(len);
    digits.parse::<u64>().ok().map(|n| (n, rest))
}

/// Expand task references into a de-duplicated, order-preserving ID list.
///
/// Tokens are separated by commas, slashes or whitespace. Ranges expand
/// ascending regardless of how they are written; tokens that are not
/// references are skipped.
///
/// A range covering more than [`MAX_RANGE_SPAN`] IDs (e.g. `T1-10001`) is
/// dropped as a whole, like any other unusable token.
///
/// # Example
/// ```
/// use cotizador::parser::parse_id_list;
/// assert_eq!(parse_id_list("T3-1, 7 / R2"), vec!["T1", "T2", "T3", "T7", "R2"]);
/// ```
pub fn parse_id_list(s: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for token in s.split(is_separator).filter(|t| !t.is_empty()) {
        let Some(tok) = parse_token(token) else {
            tracing::trace!(token, "skipping non-reference token");
            continue;
        };
        for n in tok.start..=tok.end {
            let id = format!("{}{}", tok.prefix, n);
            if seen.insert(id.clone()) {
                out.push(id);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_id() {
        assert_eq!(parse_id_list("T1"), vec!["T1"]);
    }

    #[test]
    fn test_separators() {
        assert_eq!(parse_id_list("T1,T2"), vec!["T1", "T2"]);
        assert_eq!(parse_id_list("T1 T2"), vec!["T1", "T2"]);
        assert_eq!(parse_id_list("T1/T22"), vec!["T1", "T22"]);
        assert_eq!(parse_id_list("T1,\tT2 / T3"), vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_hyphen_range() {
        assert_eq!(parse_id_list("T1-3"), vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_en_dash_range() {
        assert_eq!(parse_id_list("R5–7"), vec!["R5", "R6", "R7"]);
    }

    #[test]
    fn test_descending_range_expands_ascending() {
        assert_eq!(parse_id_list("T5-3"), vec!["T3", "T4", "T5"]);
    }

    #[test]
    fn test_mixed_lists_and_ranges() {
        assert_eq!(parse_id_list("T1, R2-4, X5"), vec!["T1", "R2", "R3", "R4", "X5"]);
    }

    #[test]
    fn test_bare_number_defaults_prefix() {
        assert_eq!(parse_id_list("123"), vec!["T123"]);
        assert_eq!(parse_id_list("2-3"), vec!["T2", "T3"]);
    }

    #[test]
    fn test_invalid_tokens_dropped() {
        assert!(parse_id_list("abc").is_empty());
        assert_eq!(parse_id_list("T1a, T-2, T2-, T3--4, T4"), vec!["T4"]);
        assert_eq!(parse_id_list("T1—3"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_id_list("").is_empty());
        assert!(parse_id_list("  , / ").is_empty());
    }

    #[test]
    fn test_dedup_across_tokens_preserves_first_occurrence() {
        assert_eq!(parse_id_list(" T1, T2 , T1-2 "), vec!["T1", "T2"]);
        assert_eq!(parse_id_list("T3, T1-4"), vec!["T3", "T1", "T2", "T4"]);
    }

    #[test]
    fn test_leading_zeros_normalized() {
        assert_eq!(parse_id_list("T01-02"), vec!["T1", "T2"]);
    }

    #[test]
    fn test_prefix_case_kept() {
        assert_eq!(parse_id_list("t1"), vec!["t1"]);
    }

    #[test]
    fn test_oversized_range_dropped() {
        assert_eq!(parse_id_list("T1-999999999, T2"), vec!["T2"]);
        assert_eq!(parse_id_list("T99999999999999999999999"), Vec::<String>::new());
        assert_eq!(parse_id_list("T1-10000").len(), 10_000);
        assert_eq!(parse_id_list("T1-10001"), Vec::<String>::new());
    }
}
