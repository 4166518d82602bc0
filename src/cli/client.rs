use super::read_input;
use crate::parser::parse_client_record;
use crate::Result;
use serde_json::Value;
use std::path::Path;

/// Parse an intake payload into a client record.
///
/// The input is handed over as a string payload, so a JSON document with a
/// `message` field and plain text both work.
pub fn run(input: Option<&Path>) -> Result<()> {
    let payload = read_input(input)?;
    let record = parse_client_record(&Value::String(payload));
    tracing::info!(project_title = %record.project_title, "client record parsed");
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
