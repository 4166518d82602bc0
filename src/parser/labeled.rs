use regex::Regex;

/// Synonyms for the client's (full) name line
pub const NAME_LABELS: &[&str] = &["Client's Name", "Client Name", "Name", "Nombre", "Nombre del cliente"];

/// Synonyms for a separate last-name line
pub const LAST_NAME_LABELS: &[&str] = &["Last name", "Last Name", "Apellido", "Apellidos"];

/// Synonyms for the company line
pub const COMPANY_LABELS: &[&str] = &["Company", "Empresa", "Compañía"];

/// Synonyms for the email line
pub const EMAIL_LABELS: &[&str] = &["Email", "E-mail", "Correo", "Correo electrónico"];

/// Build the line matcher for a synonym list.
///
/// Matches `^\s*(synonym)\s*[:\-–—]\s*(.+)$` case-insensitively. Returns
/// `None` for an empty synonym list.
fn label_regex(labels: &[&str]) -> Option<Regex> {
    if labels.is_empty() {
        return None;
    }
    let alternation = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^\s*(?:{})\s*[:\-–—]\s*(.+)$", alternation)).ok()
}

/// Find the value of the last `Label: value` line matching any synonym.
///
/// Lines are scanned in document order and a later match replaces an earlier
/// one, so restatements in a transcript override what came before. Lines
/// whose value is blank are ignored.
///
/// # Example
/// ```
/// use cotizador::parser::find_labeled_value;
/// let text = "Empresa: Acme\nnotes\nCompany - Acme Corp  ";
/// assert_eq!(find_labeled_value(text, &["Company", "Empresa"]), Some("Acme Corp".to_string()));
/// ```
pub fn find_labeled_value(text: &str, labels: &[&str]) -> Option<String> {
    let re = label_regex(labels)?;

    let mut found = None;
    for line in text.lines() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        if let Some(value) = caps.get(1) {
            let value = value.as_str().trim();
            if !value.is_empty() {
                found = Some(value.to_string());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_labeled_value_basic() {
        let text = "Nombre: John Doe\nEmail: john@example.com";
        assert_eq!(find_labeled_value(text, NAME_LABELS), Some("John Doe".to_string()));
        assert_eq!(find_labeled_value(text, EMAIL_LABELS), Some("john@example.com".to_string()));
    }

    #[test]
    fn test_find_labeled_value_last_match_wins() {
        let text = "Company: First Co\nSomething else\nEmpresa: Second Co";
        assert_eq!(find_labeled_value(text, COMPANY_LABELS), Some("Second Co".to_string()));
    }

    #[test]
    fn test_find_labeled_value_separators() {
        assert_eq!(find_labeled_value("Company - Acme", COMPANY_LABELS), Some("Acme".to_string()));
        assert_eq!(find_labeled_value("Company – Acme", COMPANY_LABELS), Some("Acme".to_string()));
        assert_eq!(find_labeled_value("Company — Acme", COMPANY_LABELS), Some("Acme".to_string()));
        assert_eq!(find_labeled_value("Company Acme", COMPANY_LABELS), None);
    }

    #[test]
    fn test_find_labeled_value_case_insensitive_and_indented() {
        let text = "    COMPAÑÍA:   Grupo Norte   ";
        assert_eq!(find_labeled_value(text, COMPANY_LABELS), Some("Grupo Norte".to_string()));
    }

    #[test]
    fn test_find_labeled_value_multiword_synonym() {
        let text = "Correo electrónico: ana@dominio.mx";
        assert_eq!(find_labeled_value(text, EMAIL_LABELS), Some("ana@dominio.mx".to_string()));
        let text = "Nombre del cliente: Ana Ruiz";
        assert_eq!(find_labeled_value(text, NAME_LABELS), Some("Ana Ruiz".to_string()));
    }

    #[test]
    fn test_find_labeled_value_escapes_special_characters() {
        assert_eq!(
            find_labeled_value("Client's Name: Bo", NAME_LABELS),
            Some("Bo".to_string())
        );
        assert_eq!(find_labeled_value("Cost (USD): 10", &["Cost (USD)"]), Some("10".to_string()));
        assert_eq!(find_labeled_value("Cost USD: 10", &["Cost (USD)"]), None);
    }

    #[test]
    fn test_find_labeled_value_requires_label_at_line_start() {
        assert_eq!(find_labeled_value("My Name: Bob", NAME_LABELS), None);
        assert_eq!(find_labeled_value("Last name: Doe", NAME_LABELS), None);
    }

    #[test]
    fn test_find_labeled_value_blank_value_ignored() {
        let text = "Company: Real Co\nCompany:   ";
        assert_eq!(find_labeled_value(text, COMPANY_LABELS), Some("Real Co".to_string()));
    }

    #[test]
    fn test_find_labeled_value_empty_inputs() {
        assert_eq!(find_labeled_value("", COMPANY_LABELS), None);
        assert_eq!(find_labeled_value("Company: X", &[]), None);
    }
}
