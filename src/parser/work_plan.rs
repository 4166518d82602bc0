//! Work plan normalizer and parser
//!
//! The normalizer coerces any decoded JSON value into a [`WorkPlanDocument`]
//! without ever failing. The parser runs JSON recovery on raw model output,
//! normalizes the result and derives totals plus a one-line summary.

use super::json::{extract_json, ExtractError};
use super::text::to_display_string;
use crate::models::{
    EstimatedEffort, ParsedWorkPlan, Phase, RoleEffort, ScheduleBound, ScheduleOptions, WorkPlanDocument,
    WorkPlanStats,
};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Characters of raw input echoed back when no JSON could be recovered
const SAMPLE_SNIPPET_CHARS: usize = 400;

/// Technologies listed in the summary line before it is cut short
const SUMMARY_TECH_LIMIT: usize = 6;

pub const UNPARSEABLE_HINT: &str =
    "Map a STRING field from the AI step (e.g., response/content/text), not the whole step object.";

#[derive(Debug, Error)]
pub enum WorkPlanError {
    #[error("{source}")]
    Unparseable {
        source: ExtractError,
        sample_snippet: String,
        hint: &'static str,
    },

    #[error("Work plan total '{field}' is not a finite number")]
    NonFiniteTotal { field: &'static str },
}

// =============================================================================
// Coercion helpers
// =============================================================================

/// Number or numeric string, else `default`. Non-finite values never escape.
pub fn as_num(value: Option<&Value>, default: f64) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite()).unwrap_or(default)
}

/// Trimmed, non-blank, de-duplicated strings in first-occurrence order.
///
/// Non-array input yields an empty list. Non-string elements are stringified
/// and `null` elements are dropped.
pub fn clean_str_array(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        })
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

fn as_string(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

// =============================================================================
// Normalizer
// =============================================================================

/// Coerce an arbitrary JSON value into a work plan document.
///
/// Missing or wrongly typed fields fall back to empty strings, empty lists
/// and zero. Normalizing the serialized form of a normalized document
/// returns an equal document.
pub fn normalize_work_plan(doc: &Value) -> WorkPlanDocument {
    let phases = doc
        .get("WorkPlan")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize_phase).collect())
        .unwrap_or_default();

    let effort = doc.get("EstimatedEffort");
    let by_role = effort
        .and_then(|e| e.get("byRole"))
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize_role).collect())
        .unwrap_or_default();

    WorkPlanDocument {
        expert_description: as_string(doc.get("expertDescription")),
        phases,
        tech_stack: clean_str_array(doc.get("TechStack")),
        inputs_required: clean_str_array(doc.get("InputsRequired")),
        assumptions: clean_str_array(doc.get("Assumptions")),
        exclusions: clean_str_array(doc.get("Exclusions")),
        acceptance_criteria: clean_str_array(doc.get("AcceptanceCriteria")),
        success_metrics: clean_str_array(doc.get("SuccessMetrics")),
        estimated_effort: EstimatedEffort {
            overall_level: as_string(effort.and_then(|e| e.get("overallLevel"))),
            by_role,
        },
    }
}

fn normalize_phase(p: &Value) -> Phase {
    Phase {
        phase_number: as_num(p.get("phaseNumber"), 0.0).trunc() as i64,
        phase_name: as_string(p.get("phaseName")),
        objectives: clean_str_array(p.get("objectives")),
        deliverables: clean_str_array(p.get("deliverables")),
        tasks: clean_str_array(p.get("tasks")),
        owner_roles: clean_str_array(p.get("ownerRoles")),
        duration_days: as_num(p.get("durationDays"), 0.0).max(0.0),
        dependencies: clean_str_array(p.get("dependencies")),
        risks: clean_str_array(p.get("risks")),
        mitigations: clean_str_array(p.get("mitigations")),
    }
}

fn normalize_role(r: &Value) -> RoleEffort {
    RoleEffort {
        role: r
            .get("role")
            .map(to_display_string)
            .unwrap_or_default()
            .trim()
            .to_string(),
        hours: as_num(r.get("hours"), 0.0),
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Parse raw model output into a normalized work plan with derived totals.
///
/// # Errors
/// * [`WorkPlanError::Unparseable`] when no JSON object can be recovered;
///   carries the first 400 characters of input and a mapping hint
/// * [`WorkPlanError::NonFiniteTotal`] when an aggregate overflows
pub fn parse_work_plan(raw_text: &str, options: &ScheduleOptions) -> Result<ParsedWorkPlan, WorkPlanError> {
    let extracted = extract_json(raw_text).map_err(|source| WorkPlanError::Unparseable {
        source,
        sample_snippet: raw_text.chars().take(SAMPLE_SNIPPET_CHARS).collect(),
        hint: UNPARSEABLE_HINT,
    })?;

    let workplan = normalize_work_plan(&extracted.value);
    let stats = compute_stats(&workplan)?;
    let schedule = compute_schedule(options, stats.total_duration_days)?;
    let summary_line = summary_line(&workplan, &stats);

    tracing::debug!(
        phases = stats.phase_count,
        tasks = stats.total_tasks,
        raw_len = extracted.raw_text.len(),
        "parsed work plan"
    );

    Ok(ParsedWorkPlan {
        workplan,
        stats,
        schedule,
        summary_line,
        raw_used: extracted.raw_text,
    })
}

/// Same as [`parse_work_plan`] for an untyped step output.
///
/// Strings are parsed as is; any other value is serialized to JSON text first.
pub fn parse_work_plan_value(raw: &Value, options: &ScheduleOptions) -> Result<ParsedWorkPlan, WorkPlanError> {
    let text = match raw {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    parse_work_plan(&text, options)
}

fn ensure_finite(value: f64, field: &'static str) -> Result<f64, WorkPlanError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkPlanError::NonFiniteTotal { field })
    }
}

fn compute_stats(doc: &WorkPlanDocument) -> Result<WorkPlanStats, WorkPlanError> {
    let total_duration_days = ensure_finite(doc.phases.iter().map(|p| p.duration_days).sum(), "durationDays")?;
    let total_tasks = doc.phases.iter().map(|p| p.tasks.len()).sum();
    let total_hours = ensure_finite(
        doc.estimated_effort
            .by_role
            .iter()
            .filter(|r| !r.role.is_empty() && r.hours.is_finite())
            .map(|r| r.hours)
            .sum(),
        "hours",
    )?;

    Ok(WorkPlanStats {
        phase_count: doc.phases.len(),
        total_duration_days,
        total_tasks,
        total_hours,
    })
}

fn compute_schedule(options: &ScheduleOptions, total_days: f64) -> Result<ScheduleBound, WorkPlanError> {
    let defaults = ScheduleOptions::default();
    let pick = |v: f64, d: f64| if v.is_finite() { v } else { d };
    let weeks = pick(options.timeframe_weeks, defaults.timeframe_weeks);
    let workdays = pick(options.workdays_per_week, defaults.workdays_per_week);
    let hours = pick(options.hours_per_day, defaults.hours_per_day);

    let max_days = ensure_finite(weeks * 7.0, "maxDays")?;
    let capacity_hours = ensure_finite(weeks * workdays * hours, "capacityHours")?;

    Ok(ScheduleBound {
        max_days,
        capacity_hours,
        exceeds_timeframe: total_days > max_days,
    })
}

fn summary_line(doc: &WorkPlanDocument, stats: &WorkPlanStats) -> String {
    let mut line = format!(
        "Plan listo: {} fases, {} días, {} tareas, esfuerzo ~{} h.",
        stats.phase_count,
        format_number(stats.total_duration_days),
        stats.total_tasks,
        format_number(stats.total_hours),
    );

    let tech = &doc.tech_stack;
    if !tech.is_empty() {
        let shown = tech.iter().take(SUMMARY_TECH_LIMIT).cloned().collect::<Vec<_>>().join(", ");
        let more = if tech.len() > SUMMARY_TECH_LIMIT { ", ..." } else { "" };
        line.push_str(&format!(" Tech: {}{}.", shown, more));
    }
    line
}

/// Whole numbers without a fractional part, everything else as is
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
