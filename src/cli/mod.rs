//! Command-line entry points
//!
//! Thin wrappers that read an input document, call one parser and print
//! the result as pretty JSON on stdout.

pub mod client;
pub mod execution_plan;
pub mod extract;
pub mod init;
pub mod section;
pub mod work_plan;

use crate::Result;
use anyhow::{bail, Context};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read the whole input from a file, or from stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Print a report and turn `ok: false` into an error for the exit status
pub fn emit_report(report: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    if report.get("ok") == Some(&Value::Bool(false)) {
        let reason = report.get("error").and_then(Value::as_str).unwrap_or("parse failed");
        bail!("{}", reason);
    }
    Ok(())
}
