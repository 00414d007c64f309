use crate::error::ApiError;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Light syntactic check only: one '@', non-empty local part, and a dotted
/// domain. Anything stricter belongs to the mail system, not us.
pub fn require_email(value: &str) -> Result<(), ApiError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ApiError::Validation(format!(
            "'{}' is not a valid email address",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(require_email("priya.patel@company.in").is_ok());
    }

    #[test]
    fn rejects_missing_at_and_bare_domain() {
        assert!(require_email("priya.patel").is_err());
        assert!(require_email("priya@company").is_err());
        assert!(require_email("@company.in").is_err());
        assert!(require_email("a b@company.in").is_err());
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(require_non_empty("department", "   ").is_err());
        assert!(require_non_empty("department", "Engineering").is_ok());
    }
}
