//! Work plan types
//!
//! Field names serialize to the schema the work-plan prompt asks the model
//! for, so a normalized document can be fed back through the normalizer.

use serde::{Deserialize, Serialize};

/// Work plan document with every field defaulted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkPlanDocument {
    #[serde(rename = "expertDescription")]
    pub expert_description: String,

    #[serde(rename = "WorkPlan")]
    pub phases: Vec<Phase>,

    #[serde(rename = "TechStack")]
    pub tech_stack: Vec<String>,

    #[serde(rename = "InputsRequired")]
    pub inputs_required: Vec<String>,

    #[serde(rename = "Assumptions")]
    pub assumptions: Vec<String>,

    #[serde(rename = "Exclusions")]
    pub exclusions: Vec<String>,

    #[serde(rename = "AcceptanceCriteria")]
    pub acceptance_criteria: Vec<String>,

    #[serde(rename = "SuccessMetrics")]
    pub success_metrics: Vec<String>,

    #[serde(rename = "EstimatedEffort")]
    pub estimated_effort: EstimatedEffort,
}

/// One phase of the work plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub phase_number: i64,
    pub phase_name: String,
    pub objectives: Vec<String>,
    pub deliverables: Vec<String>,
    pub tasks: Vec<String>,
    pub owner_roles: Vec<String>,
    /// Never negative
    pub duration_days: f64,
    pub dependencies: Vec<String>,
    pub risks: Vec<String>,
    pub mitigations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedEffort {
    /// Free-form size label (e.g. "S", "M", "L")
    pub overall_level: String,
    pub by_role: Vec<RoleEffort>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleEffort {
    pub role: String,
    pub hours: f64,
}

/// Scheduling parameters used to compute the timeframe bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    pub workdays_per_week: f64,
    pub hours_per_day: f64,
    pub timeframe_weeks: f64,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            workdays_per_week: 5.0,
            hours_per_day: 8.0,
            timeframe_weeks: 8.0,
        }
    }
}

/// Totals derived from a normalized document
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPlanStats {
    pub phase_count: usize,
    pub total_duration_days: f64,
    pub total_tasks: usize,
    /// Sum over `byRole` entries with a non-empty role
    pub total_hours: f64,
}

/// Calendar bound implied by the schedule options. Reported, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBound {
    pub max_days: f64,
    pub capacity_hours: f64,
    pub exceeds_timeframe: bool,
}

/// Successful work plan parse
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedWorkPlan {
    pub workplan: WorkPlanDocument,
    pub stats: WorkPlanStats,
    pub schedule: ScheduleBound,
    pub summary_line: String,
    /// Exact substring of the input that was parsed
    pub raw_used: String,
}
