use super::{emit_report, read_input};
use crate::parser::parse_execution_plan;
use crate::report::to_report;
use crate::Result;
use std::path::Path;

pub fn run(input: Option<&Path>) -> Result<()> {
    let markdown = read_input(input)?;
    let result = parse_execution_plan(&markdown);
    if let Ok(plan) = &result {
        tracing::info!(
            task_count = plan.stats.task_count,
            total_effort_hours = plan.stats.total_effort_hours,
            "execution plan parsed"
        );
    }
    emit_report(&to_report(&result))
}
