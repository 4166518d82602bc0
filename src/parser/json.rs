//! JSON object recovery from LLM output
//!
//! Model responses rarely arrive as a bare JSON document. This module
//! recovers a single object from text that may be:
//! - wrapped in a fenced code block (with or without a language tag)
//! - preceded or followed by prose, possibly with stray braces
//! - double-encoded as the string value of a `response` envelope

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[A-Za-z0-9_+-]*\s*(.*?)\s*```$").expect("fence pattern is valid")
});

/// Key under which some providers nest the encoded document
const ENVELOPE_KEY: &str = "response";

/// A successfully recovered JSON object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedJson {
    /// The parsed object
    pub value: Value,
    /// The exact text that was parsed
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Unable to parse JSON from input.")]
    NoJsonObject,
}

/// Recover exactly one JSON object from noisy text.
///
/// Strategy, in order:
/// 1. Unwrap a fenced code block spanning the whole (trimmed) input
/// 2. Brace-balance scan: every top-level `{...}` span is tried in turn and
///    the first that parses as an object wins
/// 3. Parse the whole text; an object is accepted as is
///
/// A recovered object whose only key is a string `response` field is an
/// envelope: the field is extracted recursively and, if that succeeds, the
/// inner object replaces the envelope.
///
/// # Example
/// ```
/// use cotizador::parser::extract_json;
/// let got = extract_json("Here you go:\n```json\n{\"a\": 1}\n```").unwrap();
/// assert_eq!(got.value["a"], 1);
/// ```
pub fn extract_json(text: &str) -> Result<ExtractedJson, ExtractError> {
    let trimmed = text.trim();
    let body = unwrap_fence(trimmed).unwrap_or(trimmed);

    let found = scan_balanced_objects(body).or_else(|| {
        tracing::trace!("no balanced object span parsed, trying whole input");
        parse_object(body).map(|value| ExtractedJson {
            value,
            raw_text: body.to_string(),
        })
    });

    match found {
        Some(extracted) => Ok(unwrap_envelope(extracted)),
        None => {
            tracing::debug!(input_len = text.len(), "no JSON object found in input");
            Err(ExtractError::NoJsonObject)
        }
    }
}

/// Interior of a fenced block covering the whole input
fn unwrap_fence(text: &str) -> Option<&str> {
    FENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Try each zero-depth `{...}` span left to right.
///
/// Unmatched closing braces before any opener are ignored. Inside a span
/// braces within string literals do not count.
fn scan_balanced_objects(text: &str) -> Option<ExtractedJson> {
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Some(from) = start.take() {
                        let candidate = &text[from..=idx];
                        if let Some(value) = parse_object(candidate) {
                            return Some(ExtractedJson {
                                value,
                                raw_text: candidate.to_string(),
                            });
                        }
                    }
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_object(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// Replace a `{"response": "<encoded object>"}` envelope with its payload.
///
/// Only an object whose single key is `response` counts as an envelope.
fn unwrap_envelope(extracted: ExtractedJson) -> ExtractedJson {
    let inner = extracted
        .value
        .as_object()
        .filter(|obj| obj.len() == 1)
        .and_then(|obj| obj.get(ENVELOPE_KEY))
        .and_then(Value::as_str)
        .and_then(|encoded| extract_json(encoded).ok());

    match inner {
        Some(inner) => {
            tracing::debug!("unwrapped double-encoded response envelope");
            inner
        }
        None => extracted,
    }
}
