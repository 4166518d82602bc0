use serde::{Deserialize, Serialize};

/// GitHub-style table: every row has exactly `headers.len()` cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of a header, compared case-insensitively
    pub fn column(&self, name: &str) -> Option<usize> {
        let name = name.trim().to_lowercase();
        self.headers.iter().position(|h| h.to_lowercase() == name)
    }

    /// Cell of `row` under the header `name`, empty when the column is missing
    pub fn cell<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.column(name)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One row of the execution plan's task table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Uppercased task identifier
    pub id: String,
    pub title: String,
    pub phase: i64,
    pub sprint_id: String,
    pub owner_role: String,
    /// Never negative
    pub effort_hours: f64,
    /// Referenced task IDs, de-duplicated in order of first occurrence
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub task_count: usize,
    pub total_effort_hours: f64,
    /// Distinct non-zero phase numbers
    pub phase_count: usize,
}

/// Successful execution plan parse
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionPlan {
    pub tasks: Vec<Task>,
    pub stats: PlanStats,
}
