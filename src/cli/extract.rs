use super::{emit_report, read_input};
use crate::parser::extract_json;
use crate::report::to_report;
use crate::Result;
use std::path::Path;

pub fn run(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    emit_report(&to_report(&extract_json(&text)))
}
