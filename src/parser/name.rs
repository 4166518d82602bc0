use super::text::title_case;

/// First/last split of a full-name string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Split a full name into first and last components.
///
/// The first token is the given name and every remaining token forms the
/// last name, both title-cased. Assumes given-name-first ordering.
pub fn split_full_name(full: &str) -> NameParts {
    let mut tokens = full.split_whitespace();
    let Some(first) = tokens.next() else {
        return NameParts::default();
    };

    let rest = tokens.collect::<Vec<_>>();
    NameParts {
        first: Some(title_case(first)),
        last: (!rest.is_empty()).then(|| title_case(&rest.join(" "))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_name_empty() {
        assert_eq!(split_full_name("   "), NameParts::default());
    }

    #[test]
    fn test_split_full_name_single_token() {
        let parts = split_full_name("madonna");
        assert_eq!(parts.first.as_deref(), Some("Madonna"));
        assert_eq!(parts.last, None);
    }

    #[test]
    fn test_split_full_name_multiple_tokens() {
        let parts = split_full_name("Jose  de la   Cruz");
        assert_eq!(parts.first.as_deref(), Some("Jose"));
        assert_eq!(parts.last.as_deref(), Some("De La Cruz"));
    }
}
