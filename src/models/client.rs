use serde::{Deserialize, Serialize};

/// Title used when the payload carries no usable message text
pub const TITLE_NO_DATA: &str = "Proyecto de IA (Datos no encontrados)";

/// Title used when a message was found but it names no company
pub const TITLE_DEFAULT: &str = "Proyecto de IA";

/// Client identity extracted from a free-text intake message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    /// Always present; derived from `company`
    pub project_title: String,
}

impl ClientRecord {
    /// Record returned when there is no message to parse
    pub fn not_found() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            company: None,
            project_title: TITLE_NO_DATA.to_string(),
        }
    }

    /// Project title for an optional company name
    pub fn title_for(company: Option<&str>) -> String {
        match company {
            Some(company) => format!("{} para {}", TITLE_DEFAULT, company),
            None => TITLE_DEFAULT.to_string(),
        }
    }
}
