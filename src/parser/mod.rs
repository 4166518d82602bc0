pub mod client;
pub mod date;
pub mod email;
pub mod execution_plan;
pub mod id_range;
pub mod json;
pub mod labeled;
pub mod markdown;
pub mod name;
pub mod text;
pub mod work_plan;

pub use client::{parse_client_message, parse_client_record};
pub use date::{proposal_date_label, today_label};
pub use email::find_email_anywhere;
pub use execution_plan::{parse_execution_plan, parse_number_cell, PlanError};
pub use id_range::parse_id_list;
pub use json::{extract_json, ExtractError, ExtractedJson};
pub use labeled::find_labeled_value;
pub use markdown::{find_section, find_subsection, parse_first_table, parse_numbered_list};
pub use name::{split_full_name, NameParts};
pub use text::{collapse_whitespace, normalize_newlines, title_case, to_display_string, unescape_newlines};
pub use work_plan::{
    as_num, clean_str_array, normalize_work_plan, parse_work_plan, parse_work_plan_value, WorkPlanError,
    UNPARSEABLE_HINT,
};
