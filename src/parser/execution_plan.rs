//! Execution plan parser
//!
//! Reads the `## Tasks` table of a markdown execution plan into [`Task`]
//! records with expanded dependency lists.

use super::id_range::parse_id_list;
use super::markdown::{find_section, parse_first_table};
use super::text::normalize_newlines;
use crate::models::{ExecutionPlan, PlanStats, Table, Task};
use std::collections::HashSet;
use thiserror::Error;

const TASKS_SECTION: &str = "Tasks";

const COL_ID: &str = "ID";
const COL_TASK: &str = "Task";
const COL_PHASE: &str = "Phase";
const COL_SPRINT: &str = "Sprint";
const COL_OWNER: &str = "Owner Role";
const COL_EFFORT: &str = "Effort (h)";
const COL_DEPENDENCIES: &str = "Dependencies";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Empty planMd input.")]
    EmptyInput,

    #[error("Execution plan total '{field}' is not a finite number")]
    NonFiniteTotal { field: &'static str },
}

/// Parse a markdown execution plan.
///
/// A document without a `Tasks` section or without a table in it parses
/// to an empty task list.
///
/// # Errors
/// * [`PlanError::EmptyInput`] when the document is blank
/// * [`PlanError::NonFiniteTotal`] when the effort sum overflows
pub fn parse_execution_plan(markdown: &str) -> Result<ExecutionPlan, PlanError> {
    let md = normalize_newlines(markdown);
    if md.trim().is_empty() {
        return Err(PlanError::EmptyInput);
    }

    let tasks = find_section(&md, TASKS_SECTION)
        .and_then(|section| parse_first_table(&section))
        .map(|table| tasks_from_table(&table))
        .unwrap_or_default();

    let stats = plan_stats(&tasks)?;
    tracing::debug!(task_count = stats.task_count, "parsed execution plan");

    Ok(ExecutionPlan { tasks, stats })
}

fn tasks_from_table(table: &Table) -> Vec<Task> {
    table
        .rows
        .iter()
        .map(|row| Task {
            id: table.cell(row, COL_ID).to_uppercase(),
            title: table.cell(row, COL_TASK).to_string(),
            phase: parse_number_cell(table.cell(row, COL_PHASE)).trunc() as i64,
            sprint_id: table.cell(row, COL_SPRINT).to_string(),
            owner_role: table.cell(row, COL_OWNER).to_string(),
            effort_hours: parse_number_cell(table.cell(row, COL_EFFORT)).max(0.0),
            dependencies: parse_dependencies(table.cell(row, COL_DEPENDENCIES)),
        })
        .collect()
}

/// Number from a cell after dropping everything but digits, `.` and `-`.
///
/// Falls back to 0 when what remains is not a finite number.
pub fn parse_number_cell(cell: &str) -> f64 {
    let kept: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if kept.is_empty() {
        return 0.0;
    }
    kept.parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Dependencies cell split on `,` and `+`, each part expanded as an ID list
fn parse_dependencies(cell: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    cell.split([',', '+'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .flat_map(parse_id_list)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

fn plan_stats(tasks: &[Task]) -> Result<PlanStats, PlanError> {
    let phases: HashSet<i64> = tasks.iter().map(|t| t.phase).filter(|&p| p != 0).collect();
    let total_effort_hours: f64 = tasks.iter().map(|t| t.effort_hours).sum();
    if !total_effort_hours.is_finite() {
        return Err(PlanError::NonFiniteTotal {
            field: "totalEffortHours",
        });
    }

    Ok(PlanStats {
        task_count: tasks.len(),
        total_effort_hours,
        phase_count: phases.len(),
    })
}
