pub mod client;
pub mod config;
pub mod execution_plan;
pub mod work_plan;

pub use client::{ClientRecord, TITLE_DEFAULT, TITLE_NO_DATA};
pub use config::{CotizadorConfig, ScheduleConfig, CONFIG_FILE};
pub use execution_plan::{ExecutionPlan, PlanStats, Table, Task};
pub use work_plan::{
    EstimatedEffort, ParsedWorkPlan, Phase, RoleEffort, ScheduleBound, ScheduleOptions, WorkPlanDocument,
    WorkPlanStats,
};
