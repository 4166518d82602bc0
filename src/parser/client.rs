//! Client identity parser
//!
//! Builds a [`ClientRecord`] from an intake payload. The payload is either a
//! JSON document with a `message` field, that document still encoded as a
//! string, or the raw message text itself.

use super::email::find_email_anywhere;
use super::labeled::{find_labeled_value, COMPANY_LABELS, EMAIL_LABELS, LAST_NAME_LABELS, NAME_LABELS};
use super::name::split_full_name;
use super::text::{collapse_whitespace, normalize_newlines, title_case, to_display_string, unescape_newlines};
use crate::models::ClientRecord;
use serde_json::Value;

/// Parse a client record from an intake payload.
///
/// - `String`: decoded as JSON when possible, otherwise used as the message
/// - `Object`: its `message` field is the message
/// - anything else carries no message
///
/// Never fails. Without usable message text the record is
/// [`ClientRecord::not_found`].
pub fn parse_client_record(payload: &Value) -> ClientRecord {
    let message = match payload {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(decoded) => message_field(&decoded),
            Err(_) => raw.clone(),
        },
        other => message_field(other),
    };
    parse_client_message(&message)
}

/// `message` of a decoded payload object, empty for anything else
fn message_field(value: &Value) -> String {
    value
        .as_object()
        .and_then(|obj| obj.get("message"))
        .map(to_display_string)
        .unwrap_or_default()
}

/// Parse a client record from message text
pub fn parse_client_message(message: &str) -> ClientRecord {
    let msg = unescape_newlines(&normalize_newlines(message));
    let msg = msg.trim();
    if msg.is_empty() {
        tracing::debug!("client payload has no message text");
        return ClientRecord::not_found();
    }

    let name_line = find_labeled_value(msg, NAME_LABELS);
    let last_name_line = find_labeled_value(msg, LAST_NAME_LABELS);
    let company_line = find_labeled_value(msg, COMPANY_LABELS);
    let email = find_labeled_value(msg, EMAIL_LABELS).or_else(|| find_email_anywhere(msg));

    let (first_name, last_name) = match (name_line, last_name_line) {
        (Some(full), None) => {
            let parts = split_full_name(&full);
            (parts.first, parts.last)
        }
        (first, last) => (
            first.map(|v| title_case(&collapse_whitespace(&v))),
            last.map(|v| title_case(&collapse_whitespace(&v))),
        ),
    };

    let company = company_line
        .map(|v| collapse_whitespace(&v))
        .filter(|v| !v.is_empty());
    let project_title = ClientRecord::title_for(company.as_deref());

    tracing::debug!(
        has_name = first_name.is_some(),
        has_email = email.is_some(),
        has_company = company.is_some(),
        "parsed client record"
    );

    ClientRecord {
        first_name,
        last_name,
        email,
        company,
        project_title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_payload_returns_not_found() {
        assert_eq!(parse_client_record(&Value::Null), ClientRecord::not_found());
    }

    #[test]
    fn test_empty_message_returns_not_found() {
        assert_eq!(parse_client_record(&json!({"message": "   "})), ClientRecord::not_found());
        assert_eq!(parse_client_record(&json!("")), ClientRecord::not_found());
        assert_eq!(parse_client_record(&json!({"other": 1})), ClientRecord::not_found());
    }

    #[test]
    fn test_plain_string_payload() {
        let message = "
            Nombre: John Doe
            Email: john.doe@example.com
            Company: Example Corp
        ";
        let record = parse_client_record(&json!(message));
        assert_eq!(
            record,
            ClientRecord {
                first_name: Some("John".to_string()),
                last_name: Some("Doe".to_string()),
                email: Some("john.doe@example.com".to_string()),
                company: Some("Example Corp".to_string()),
                project_title: "Proyecto de IA para Example Corp".to_string(),
            }
        );
    }

    #[test]
    fn test_json_encoded_payload_with_escaped_newlines() {
        let payload = json!({
            "message": "Name: Jane Smith\\nEmail: jane.smith@test.com\\nCompany: Test Inc."
        })
        .to_string();
        let record = parse_client_record(&Value::String(payload));
        assert_eq!(record.first_name.as_deref(), Some("Jane"));
        assert_eq!(record.last_name.as_deref(), Some("Smith"));
        assert_eq!(record.email.as_deref(), Some("jane.smith@test.com"));
        assert_eq!(record.company.as_deref(), Some("Test Inc."));
        assert_eq!(record.project_title, "Proyecto de IA para Test Inc.");
    }

    #[test]
    fn test_object_payload_without_company() {
        let record = parse_client_record(&json!({
            "message": "Client Name: Solo Name\\nCorreo electrónico: solo@name.org"
        }));
        assert_eq!(record.first_name.as_deref(), Some("Solo"));
        assert_eq!(record.last_name.as_deref(), Some("Name"));
        assert_eq!(record.email.as_deref(), Some("solo@name.org"));
        assert_eq!(record.company, None);
        assert_eq!(record.project_title, "Proyecto de IA");
    }

    #[test]
    fn test_compound_last_name() {
        let record = parse_client_message("Name: Jose de la Cruz\\nEmail: jose@cruz.com");
        assert_eq!(record.first_name.as_deref(), Some("Jose"));
        assert_eq!(record.last_name.as_deref(), Some("De La Cruz"));
    }

    #[test]
    fn test_separate_last_name_line_is_not_split() {
        let record = parse_client_message("Nombre: maria  jose\nApellidos: garcia   lopez");
        assert_eq!(record.first_name.as_deref(), Some("Maria Jose"));
        assert_eq!(record.last_name.as_deref(), Some("Garcia Lopez"));
    }

    #[test]
    fn test_last_name_without_name_line() {
        let record = parse_client_message("Apellido: perez");
        assert_eq!(record.first_name, None);
        assert_eq!(record.last_name.as_deref(), Some("Perez"));
    }

    #[test]
    fn test_unlabeled_email_fallback() {
        let record = parse_client_message("My name is Bob. My email is bob@builder.com. I work for Bob's Builders.");
        assert_eq!(record.email.as_deref(), Some("bob@builder.com"));
        assert_eq!(record.first_name, None);
        assert_eq!(record.project_title, "Proyecto de IA");
    }

    #[test]
    fn test_labeled_email_preferred_over_prose() {
        let record = parse_client_message("cc: other@x.com\nEmail: mine@y.com");
        assert_eq!(record.email.as_deref(), Some("mine@y.com"));
    }

    #[test]
    fn test_restated_company_overrides_earlier() {
        let record = parse_client_message("Company: Old Co\nActually...\nCompany: New   Co");
        assert_eq!(record.company.as_deref(), Some("New Co"));
        assert_eq!(record.project_title, "Proyecto de IA para New Co");
    }

    #[test]
    fn test_crlf_message() {
        let record = parse_client_message("Name: Ann Lee\r\nCompany: Lee LLC\r\n");
        assert_eq!(record.last_name.as_deref(), Some("Lee"));
        assert_eq!(record.company.as_deref(), Some("Lee LLC"));
    }

    #[test]
    fn test_json_string_that_is_not_an_object() {
        assert_eq!(parse_client_record(&json!("42")), ClientRecord::not_found());
    }

    #[test]
    fn test_non_string_message_is_stringified() {
        let record = parse_client_record(&json!({"message": ["Name: Ada"]}));
        assert_eq!(record.project_title, "Proyecto de IA");
    }
}
