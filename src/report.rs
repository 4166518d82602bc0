//! `ok`-tagged JSON rendering of parse results
//!
//! The orchestration layer branches on an `ok` flag rather than on error
//! types, so every boundary result serializes as either
//! `{ "ok": true, ...fields }` or `{ "ok": false, "error": "...", ...context }`.

use crate::parser::{ExtractError, PlanError, WorkPlanError};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt::Display;

/// Extra fields attached to an `ok: false` report
pub trait FailureContext {
    fn context(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl FailureContext for ExtractError {}

impl FailureContext for PlanError {}

impl FailureContext for WorkPlanError {
    fn context(&self) -> Vec<(&'static str, String)> {
        match self {
            WorkPlanError::Unparseable {
                sample_snippet, hint, ..
            } => vec![("sampleSnippet", sample_snippet.clone()), ("hint", hint.to_string())],
            WorkPlanError::NonFiniteTotal { .. } => Vec::new(),
        }
    }
}

/// Serializable view over a boundary result
pub struct Report<'a, T, E>(pub &'a Result<T, E>);

impl<T, E> Serialize for Report<'_, T, E>
where
    T: Serialize,
    E: Display + FailureContext,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self.0 {
            Ok(value) => {
                map.serialize_entry("ok", &true)?;
                match serde_json::to_value(value).map_err(S::Error::custom)? {
                    Value::Object(fields) => {
                        for (key, field) in &fields {
                            map.serialize_entry(key, field)?;
                        }
                    }
                    other => map.serialize_entry("value", &other)?,
                }
            }
            Err(err) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", &err.to_string())?;
                for (key, field) in err.context() {
                    map.serialize_entry(key, &field)?;
                }
            }
        }
        map.end()
    }
}

/// Render a boundary result as an `ok`-tagged JSON value
pub fn to_report<T, E>(result: &Result<T, E>) -> Value
where
    T: Serialize,
    E: Display + FailureContext,
{
    serde_json::to_value(Report(result)).unwrap_or_else(|e| {
        serde_json::json!({ "ok": false, "error": e.to_string() })
    })
}
