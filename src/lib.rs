// Cotizador - structured extraction for an AI proposal pipeline
// Turns LLM output and free-form intake text into typed records

pub mod cli;
pub mod models;
pub mod parser;
pub mod report;

pub use anyhow::{Context, Result};

// Boundary functions used by the orchestration layer
pub use parser::{extract_json, parse_client_record, parse_execution_plan, parse_work_plan};

// Re-export commonly used types
pub use models::{ClientRecord, ExecutionPlan, ParsedWorkPlan, ScheduleOptions, Task, WorkPlanDocument};
pub use report::{to_report, Report};
